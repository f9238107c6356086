use crate::TYPE_PROPERTY;

use std::collections::BTreeMap;

use bytes::Bytes;

/// Transport-ready envelope handed to the broker client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerMessage {
    /// Serialized payload (ready to send on wire)
    body: Bytes,
    /// Application properties sent alongside the body
    application_properties: BTreeMap<String, String>,
}

impl BrokerMessage {
    pub fn new<B: Into<Bytes>>(body: B) -> Self {
        Self {
            body: body.into(),
            application_properties: BTreeMap::new(),
        }
    }

    pub fn with_property<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.application_properties.insert(key.into(), value.into());
        self
    }

    pub fn set_property<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.application_properties.insert(key.into(), value.into());
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as text, if it is valid UTF-8.
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Body length in bytes
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.application_properties.get(key).map(String::as_str)
    }

    /// The type discriminator, when the message came from the builder.
    pub fn message_type(&self) -> Option<&str> {
        self.property(TYPE_PROPERTY)
    }

    pub fn application_properties(&self) -> &BTreeMap<String, String> {
        &self.application_properties
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }
}
