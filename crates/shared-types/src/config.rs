use serde::{Deserialize, Serialize};

/// Placeholder shown for storage entries whose case no longer exists.
pub const UNKNOWN_CASE_LABEL: &str = "Unknown Case";

/// Settings for the header search box and the case-linked name lookup.
///
/// Every field has a default so that a missing or partial `[search]`
/// table still yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchSettings {
    /// Maximum hits shown per entity group in the header dropdown.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
    #[serde(default = "default_unknown_case_label")]
    pub unknown_case_label: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
            unknown_case_label: default_unknown_case_label(),
        }
    }
}

fn default_display_limit() -> usize {
    5
}

fn default_unknown_case_label() -> String {
    UNKNOWN_CASE_LABEL.to_string()
}

/// Settings for the notification bell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationSettings {
    /// How many days ahead an appointment or deadline starts notifying.
    #[serde(default = "default_window_days")]
    pub window_days: i64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
        }
    }
}

fn default_window_days() -> i64 {
    1
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub notifications: NotificationSettings,
}
