use crate::{CRITICAL_TARGET, MessageBuilder, panic_message};

use sbm_core::{ApplicationMessage, BrokerMessage, BuildError, BuildResult, TypeDiscriminator};

use std::sync::Arc;

use log::error;

/// Suspending variant of [`MessageBuilder::build`].
///
/// Serialization runs on the blocking pool so large payloads do not stall the
/// async workers. Concurrent calls complete in no particular order.
pub async fn build_async<B, M>(
    builder: Arc<B>,
    message: M,
    discriminator: TypeDiscriminator,
) -> BuildResult<BrokerMessage>
where
    B: MessageBuilder + ?Sized + 'static,
    M: ApplicationMessage + Send + 'static,
{
    let type_name = discriminator.to_string();

    let result =
        tokio::task::spawn_blocking(move || builder.build(&message, &discriminator)).await;

    match result {
        Ok(built) => built,
        Err(join_error) => {
            let reason = if join_error.is_panic() {
                panic_message(join_error.into_panic())
            } else {
                String::from("Task cancelled")
            };

            error!(
                target: CRITICAL_TARGET,
                "Build task failed: type={}, error={}", type_name, reason
            );

            Err(BuildError::unexpected(type_name, reason))
        }
    }
}
