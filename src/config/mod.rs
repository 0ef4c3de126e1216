pub mod context;
pub mod settings;

pub use context::AppContext;
pub use settings::{load_config, parse_config, read_config, ApiConfig, AppConfig, ConfigSource};
