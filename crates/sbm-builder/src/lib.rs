pub mod async_build;
pub mod broker_message_builder;
pub mod builder_config;
pub mod json_serializer;
pub mod message_builder;
pub mod registrar;

pub use async_build::build_async;
pub use broker_message_builder::BrokerMessageBuilder;
pub use builder_config::BuilderConfig;
pub use json_serializer::JsonSerializer;
pub use message_builder::{MessageBuilder, SharedMessageBuilder};
pub use registrar::register_message_builder;

#[cfg(test)]
mod tests;

use std::any::Any;

/// Log target for critical build failures.
///
/// `log` has no level above `Error`, so critical events are emitted at `Error`
/// on this target and can be routed or filtered separately from ordinary
/// oversize rejections.
pub const CRITICAL_TARGET: &str = "sbm_builder::critical";

/// Extract a readable message from a panic payload
pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(any) => match any.downcast::<&str>() {
            Ok(msg) => msg.to_string(),
            Err(_) => "Unknown panic".to_string(),
        },
    }
}
