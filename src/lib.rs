pub mod config;
pub mod error;
pub mod monitor;
pub mod response;
pub mod routes;
pub mod util;

pub use config::{AppConfig, AppContext, ConfigSource};
pub use error::ConfigError;
pub use response::{normalize, normalize_body, CanonicalResponse};
