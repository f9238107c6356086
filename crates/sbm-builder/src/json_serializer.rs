use sbm_core::{Encoding, JsonStyle, OutgoingMessage};

use std::io;

/// JSON serializer used by the builder.
///
/// Both entry points return `Ok(None)` when the message serializes to `null`,
/// which the builder treats as "no output".
pub struct JsonSerializer;

impl JsonSerializer {
    /// Serialize straight to a UTF-8 buffer.
    pub fn serialize_to_bytes(
        message: &dyn OutgoingMessage,
        style: JsonStyle,
        encoding: Encoding,
    ) -> serde_json::Result<Option<Vec<u8>>> {
        let mut out = Vec::with_capacity(128);
        message.write_json(&mut out, style, encoding.naming_policy())?;

        if out == b"null" {
            return Ok(None);
        }

        Ok(Some(out))
    }

    /// Serialize to a string.
    pub fn serialize_to_string(
        message: &dyn OutgoingMessage,
        style: JsonStyle,
        encoding: Encoding,
    ) -> serde_json::Result<Option<String>> {
        let Some(bytes) = Self::serialize_to_bytes(message, style, encoding)? else {
            return Ok(None);
        };

        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}
