pub mod config;
pub mod dates;
pub mod filter;
pub mod linked;
pub mod notify;
pub mod sort;
pub mod universal;

pub use dates::TimeBucket;
pub use filter::*;
pub use linked::*;
pub use notify::*;
pub use sort::*;
pub use universal::*;
