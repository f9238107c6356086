use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Why a message was not produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildFailure {
    /// Encoded body is larger than the configured limit
    Oversize,
    /// The serializer reported an error or produced no output
    SerializationFailed,
    /// Anything else, including a panic inside a `Serialize` implementation
    Unexpected,
}

impl BuildFailure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oversize => "oversize",
            Self::SerializationFailed => "serialization_failed",
            Self::Unexpected => "unexpected",
        }
    }
}

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Couldn't serialize message of type {type_name}: {source} {location}")]
    Serialization {
        type_name: String,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Serializer produced no output for message of type {type_name} {location}")]
    EmptyOutput {
        type_name: String,
        location: ErrorLocation,
    },

    #[error("Message of type {type_name} is {size} bytes (limit: {limit}) {location}")]
    Oversize {
        type_name: String,
        size: usize,
        limit: usize,
        location: ErrorLocation,
    },

    #[error("Unexpected failure building message of type {type_name}: {message} {location}")]
    Unexpected {
        type_name: String,
        message: String,
        location: ErrorLocation,
    },
}

impl BuildError {
    #[track_caller]
    pub fn serialization<S: Into<String>>(type_name: S, source: serde_json::Error) -> Self {
        Self::Serialization {
            type_name: type_name.into(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn empty_output<S: Into<String>>(type_name: S) -> Self {
        Self::EmptyOutput {
            type_name: type_name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn oversize<S: Into<String>>(type_name: S, size: usize, limit: usize) -> Self {
        Self::Oversize {
            type_name: type_name.into(),
            size,
            limit,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected<S: Into<String>, M: Into<String>>(type_name: S, message: M) -> Self {
        Self::Unexpected {
            type_name: type_name.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn failure(&self) -> BuildFailure {
        match self {
            Self::Serialization { .. } | Self::EmptyOutput { .. } => {
                BuildFailure::SerializationFailed
            }
            Self::Oversize { .. } => BuildFailure::Oversize,
            Self::Unexpected { .. } => BuildFailure::Unexpected,
        }
    }

    /// Oversize is an ordinary rejection, everything else is critical.
    pub fn is_oversize(&self) -> bool {
        matches!(self, Self::Oversize { .. })
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::Serialization { type_name, .. }
            | Self::EmptyOutput { type_name, .. }
            | Self::Oversize { type_name, .. }
            | Self::Unexpected { type_name, .. } => type_name,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Serialization { .. } => "SERIALIZATION_FAILED",
            Self::EmptyOutput { .. } => "EMPTY_OUTPUT",
            Self::Oversize { .. } => "OVERSIZE",
            Self::Unexpected { .. } => "UNEXPECTED",
        }
    }
}

pub type BuildResult<T> = StdResult<T, BuildError>;
