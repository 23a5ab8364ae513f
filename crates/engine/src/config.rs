use shared_types::{AppConfig, AppError};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides [`CONFIG_PATH`].
pub const CONFIG_ENV: &str = "CASEDESK_CONFIG";

/// Read and parse a config file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, AppError> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("cannot read {}: {e}", path.display())))?;
    toml::from_str(&contents)
        .map_err(|e| AppError::config(format!("cannot parse {}: {e}", path.display())))
}

fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH))
}

/// Load `config.toml` once and return the cached result on later calls.
///
/// If the file is missing or unparseable, defaults are used.
pub fn load_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let path = config_path();
        match load_config_from(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), ?config, "loaded config");
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default config");
                AppConfig::default()
            }
        }
    })
}
