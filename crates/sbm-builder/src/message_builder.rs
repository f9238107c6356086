use sbm_core::{BrokerMessage, BuildResult, OutgoingMessage, TypeDiscriminator};

use std::sync::Arc;

/// Turns application messages into broker messages.
///
/// Implementations never panic past this boundary: every failure comes back as a
/// [`sbm_core::BuildError`], and callers treat any error as "message was not sent".
///
/// A panic inside a `Serialize` implementation is caught and returned as
/// `Unexpected`, but the process panic hook still runs first. With the default
/// hook that prints a panic report to stderr; hosts that want those reports in
/// their own logs install a hook with [`std::panic::set_hook`].
pub trait MessageBuilder: Send + Sync {
    fn build(
        &self,
        message: &dyn OutgoingMessage,
        discriminator: &TypeDiscriminator,
    ) -> BuildResult<BrokerMessage>;
}

/// Handle registered once at startup and shared by every caller.
pub type SharedMessageBuilder = Arc<dyn MessageBuilder>;
