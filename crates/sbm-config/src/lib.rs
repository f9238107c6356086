mod broker_config;
mod config;
mod error;
mod log_level;
mod logging_config;

pub use broker_config::BrokerConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "SBM_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_CONFIG_DIR: &str = ".sbm";
const DEFAULT_BROKER_LOG: bool = false;
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

const MIN_MAX_MESSAGE_BYTES: usize = 1;
