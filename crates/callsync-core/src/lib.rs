mod config;
mod window;

pub use config::{Config, ConfigError, DEFAULT_TUNER_API_URL, DEFAULT_WINDOW_HOURS};
pub use window::SyncWindow;
