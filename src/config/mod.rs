// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{load_config, load_from_file, user_config_path};
pub use settings::{Config, DataConfig, ServerConfig};
