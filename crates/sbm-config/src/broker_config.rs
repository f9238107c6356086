use crate::{ConfigError, ConfigErrorResult, DEFAULT_BROKER_LOG, MIN_MAX_MESSAGE_BYTES};

use sbm_core::MAX_MESSAGE_BYTES;

use serde::Deserialize;

/// Settings read by the message builder.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrokerConfig {
    /// Verbose builder logging: pretty payloads, payload contents in debug and
    /// critical diagnostics
    pub log: bool,
    /// Largest body the builder may produce, never above the broker-safe ceiling
    pub max_message_bytes: usize,
}

impl Default for BrokerConfig {
    fn default() -> Self {
        Self {
            log: DEFAULT_BROKER_LOG,
            max_message_bytes: MAX_MESSAGE_BYTES,
        }
    }
}

impl BrokerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_message_bytes < MIN_MAX_MESSAGE_BYTES
            || self.max_message_bytes > MAX_MESSAGE_BYTES
        {
            return Err(ConfigError::broker(format!(
                "broker.max_message_bytes must be {}-{}, got {}",
                MIN_MAX_MESSAGE_BYTES, MAX_MESSAGE_BYTES, self.max_message_bytes
            )));
        }

        Ok(())
    }
}
