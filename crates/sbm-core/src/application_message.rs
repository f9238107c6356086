use crate::{Encoding, JsonStyle, NamingPolicy, RenamingSerializer};

use serde::Serialize;

/// A typed message the application wants to put on a queue.
///
/// The implementing type is the payload. The builder only borrows it.
pub trait ApplicationMessage: Serialize {
    /// Destination queue or topic name
    fn queue(&self) -> &str;

    /// Serializer convention for this message. Heterogeneous message types may
    /// mix conventions within one process.
    fn encoding(&self) -> Encoding {
        Encoding::Standard
    }
}

/// Object-safe view of an [`ApplicationMessage`].
///
/// Implemented for every `ApplicationMessage`, so `&my_message` coerces to
/// `&dyn OutgoingMessage` at the builder boundary.
pub trait OutgoingMessage {
    fn selected_encoding(&self) -> Encoding;

    /// Stream the message as JSON into `out`, respelling struct fields with
    /// `policy`.
    fn write_json(
        &self,
        out: &mut Vec<u8>,
        style: JsonStyle,
        policy: NamingPolicy,
    ) -> serde_json::Result<()>;
}

impl<M: ApplicationMessage> OutgoingMessage for M {
    fn selected_encoding(&self) -> Encoding {
        ApplicationMessage::encoding(self)
    }

    fn write_json(
        &self,
        out: &mut Vec<u8>,
        style: JsonStyle,
        policy: NamingPolicy,
    ) -> serde_json::Result<()> {
        if style.is_pretty() {
            let mut serializer = serde_json::Serializer::pretty(out);
            self.serialize(RenamingSerializer::new(&mut serializer, policy))
        } else {
            let mut serializer = serde_json::Serializer::new(out);
            self.serialize(RenamingSerializer::new(&mut serializer, policy))
        }
    }
}
