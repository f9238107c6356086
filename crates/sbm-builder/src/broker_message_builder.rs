use crate::{BuilderConfig, CRITICAL_TARGET, JsonSerializer, MessageBuilder, panic_message};

use sbm_config::Config;
use sbm_core::{
    BrokerMessage, BuildError, BuildResult, Encoding, OutgoingMessage, TYPE_PROPERTY,
    TypeDiscriminator,
};

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use log::{Level, debug, error, log_enabled};

/// Serializes, size-checks and wraps application messages.
///
/// Cheap to clone; clones share the same immutable [`BuilderConfig`].
#[derive(Debug, Clone, Default)]
pub struct BrokerMessageBuilder {
    config: Arc<BuilderConfig>,
}

impl BrokerMessageBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(BuilderConfig::from(config))
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    fn build_standard(
        &self,
        message: &dyn OutgoingMessage,
        discriminator: &TypeDiscriminator,
    ) -> BuildResult<BrokerMessage> {
        let bytes =
            JsonSerializer::serialize_to_bytes(message, self.config.style(), Encoding::Standard)
                .map_err(|e| BuildError::serialization(discriminator.as_str(), e))?
                .ok_or_else(|| BuildError::empty_output(discriminator.as_str()))?;

        self.ensure_within_limit(bytes.len(), discriminator)?;

        if self.config.verbose() && log_enabled!(Level::Debug) {
            debug!(
                "Creating message ({}): {}",
                discriminator,
                String::from_utf8_lossy(&bytes)
            );
        }

        Ok(BrokerMessage::new(bytes).with_property(TYPE_PROPERTY, discriminator.as_str()))
    }

    fn build_legacy(
        &self,
        message: &dyn OutgoingMessage,
        discriminator: &TypeDiscriminator,
    ) -> BuildResult<BrokerMessage> {
        let serialized =
            JsonSerializer::serialize_to_string(message, self.config.style(), Encoding::Legacy)
                .map_err(|e| BuildError::serialization(discriminator.as_str(), e))?
                .ok_or_else(|| BuildError::empty_output(discriminator.as_str()))?;

        // String::len is the UTF-8 byte count, the same measure the transport enforces
        self.ensure_within_limit(serialized.len(), discriminator)?;

        if self.config.verbose() && log_enabled!(Level::Debug) {
            debug!("Creating message ({}): {}", discriminator, serialized);
        }

        Ok(BrokerMessage::new(serialized).with_property(TYPE_PROPERTY, discriminator.as_str()))
    }

    fn ensure_within_limit(&self, size: usize, discriminator: &TypeDiscriminator) -> BuildResult<()> {
        let limit = self.config.max_message_bytes();

        if size > limit {
            error!(
                "Message size over limit: type={}, size={} bytes, limit={} bytes",
                discriminator, size, limit
            );
            return Err(BuildError::oversize(discriminator.as_str(), size, limit));
        }

        Ok(())
    }

    fn log_critical(
        &self,
        error: &BuildError,
        message: &dyn OutgoingMessage,
        discriminator: &TypeDiscriminator,
    ) {
        if !log_enabled!(target: CRITICAL_TARGET, Level::Error) {
            return;
        }

        if self.config.verbose() {
            // Serialize only when the payload is going to be logged
            let payload = self.diagnostic_payload(message);
            error!(
                target: CRITICAL_TARGET,
                "Error building broker message: type={}, code={}, message={}, error={}",
                discriminator,
                error.error_code(),
                payload,
                error
            );
        } else {
            error!(
                target: CRITICAL_TARGET,
                "Error building broker message: type={}, code={}, error={}",
                discriminator,
                error.error_code(),
                error
            );
        }
    }

    /// Best-effort payload rendering for diagnostics. Never fails.
    fn diagnostic_payload(&self, message: &dyn OutgoingMessage) -> String {
        let style = self.config.style();
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| {
            JsonSerializer::serialize_to_string(message, style, message.selected_encoding())
        }));

        match attempt {
            Ok(Ok(Some(payload))) => payload,
            Ok(Ok(None)) => String::from("null"),
            Ok(Err(e)) => format!("<unavailable: {e}>"),
            Err(_) => String::from("<unavailable: serializer panicked>"),
        }
    }
}

impl MessageBuilder for BrokerMessageBuilder {
    fn build(
        &self,
        message: &dyn OutgoingMessage,
        discriminator: &TypeDiscriminator,
    ) -> BuildResult<BrokerMessage> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            match message.selected_encoding() {
                Encoding::Standard => self.build_standard(message, discriminator),
                Encoding::Legacy => self.build_legacy(message, discriminator),
            }
        }));

        let result = match outcome {
            Ok(result) => result,
            Err(payload) => Err(BuildError::unexpected(
                discriminator.as_str(),
                panic_message(payload),
            )),
        };

        if let Err(error) = &result
            && !error.is_oversize()
        {
            self.log_critical(error, message, discriminator);
        }

        result
    }
}
