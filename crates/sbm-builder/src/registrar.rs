use crate::{BrokerMessageBuilder, BuilderConfig, SharedMessageBuilder};

use sbm_config::Config;

use std::sync::Arc;

use log::info;

/// Construct the message builder from loaded configuration.
///
/// Call once at startup and share the handle (singleton), or once per scope.
/// The configuration is captured here and never re-read.
pub fn register_message_builder(config: &Config) -> SharedMessageBuilder {
    let builder_config = BuilderConfig::from(config);

    info!(
        "Message builder registered: verbose={}, style={}, max_message_bytes={}",
        builder_config.verbose(),
        builder_config.style().as_str(),
        builder_config.max_message_bytes()
    );

    Arc::new(BrokerMessageBuilder::new(builder_config))
}
