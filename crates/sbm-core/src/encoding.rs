use crate::NamingPolicy;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Serialization convention chosen per message.
///
/// Both conventions emit JSON from the same `serde` data model and differ in how
/// struct field names are spelled, so a consumer expecting one cannot silently
/// read the other. Map keys and enum variant names are written as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// Web JSON, `camelCase` fields, emitted as a UTF-8 byte buffer
    #[default]
    Standard,
    /// `PascalCase` fields, emitted through the string serializer
    Legacy,
}

impl Encoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legacy => "legacy",
        }
    }

    pub fn naming_policy(&self) -> NamingPolicy {
        match self {
            Self::Standard => NamingPolicy::CamelCase,
            Self::Legacy => NamingPolicy::PascalCase,
        }
    }

    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy { Self::Legacy } else { Self::Standard }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
