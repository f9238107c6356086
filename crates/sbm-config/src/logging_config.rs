use crate::{ConfigError, ConfigErrorResult, DEFAULT_LOG_COLORED, DEFAULT_LOG_LEVEL, LogLevel};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    /// Colored output when logging to a terminal (ignored for file output)
    pub colored: bool,
    /// Append to this file instead of the console
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel(DEFAULT_LOG_LEVEL),
            colored: DEFAULT_LOG_COLORED,
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(file) = &self.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file cannot be blank"));
        }

        Ok(())
    }
}
