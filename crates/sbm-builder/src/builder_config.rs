use sbm_config::{BrokerConfig, Config};
use sbm_core::{JsonStyle, MAX_MESSAGE_BYTES};

/// Immutable settings captured when the builder is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    verbose: bool,
    style: JsonStyle,
    max_message_bytes: usize,
}

impl BuilderConfig {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            style: JsonStyle::from_verbose(verbose),
            max_message_bytes: MAX_MESSAGE_BYTES,
        }
    }

    /// Lower the body limit. Values above the broker-safe ceiling are clamped.
    pub fn with_max_message_bytes(mut self, max_message_bytes: usize) -> Self {
        self.max_message_bytes = max_message_bytes.min(MAX_MESSAGE_BYTES);
        self
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn style(&self) -> JsonStyle {
        self.style
    }

    pub fn max_message_bytes(&self) -> usize {
        self.max_message_bytes
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<&BrokerConfig> for BuilderConfig {
    fn from(broker: &BrokerConfig) -> Self {
        Self::new(broker.log).with_max_message_bytes(broker.max_message_bytes)
    }
}

impl From<&Config> for BuilderConfig {
    fn from(config: &Config) -> Self {
        Self::from(&config.broker)
    }
}
