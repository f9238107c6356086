pub mod application_message;
pub mod broker_message;
pub mod encoding;
pub mod error;
pub mod json_style;
pub mod naming_policy;
pub mod renaming_serializer;
pub mod type_discriminator;

pub use application_message::{ApplicationMessage, OutgoingMessage};
pub use broker_message::BrokerMessage;
pub use encoding::Encoding;
pub use error::{BuildError, BuildFailure, BuildResult};
pub use json_style::JsonStyle;
pub use naming_policy::NamingPolicy;
pub use renaming_serializer::RenamingSerializer;
pub use type_discriminator::TypeDiscriminator;


/// Largest body the builder will hand to the transport.
///
/// Sits below the broker's hard limit to leave room for the metadata the
/// transport layer adds after the message leaves this crate.
pub const MAX_MESSAGE_BYTES: usize = 260_096;

/// Application property carrying the type discriminator.
pub const TYPE_PROPERTY: &str = "type";
