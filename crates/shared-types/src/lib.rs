pub mod config;
pub mod error;
pub mod search;

// Entity records
pub mod appointment;
pub mod case;
pub mod counsel;
pub mod expense;
pub mod library;
pub mod storage;
pub mod task;

pub use config::*;
pub use error::*;
pub use search::*;

pub use appointment::*;
pub use case::*;
pub use counsel::*;
pub use expense::*;
pub use library::*;
pub use storage::*;
pub use task::*;
