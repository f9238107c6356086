use sbm_config::ConfigError;
use sbm_core::BuildError;

use std::panic::Location;
use std::path::PathBuf;
use std::process::ExitCode;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

pub const EXIT_FAILURE: u8 = 1;
/// Exit status for a message rejected as oversize
pub const EXIT_OVERSIZE: u8 = 2;

/// Errors surfaced by the `sbm` binary
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: ConfigError,
    },

    #[error("IO error reading {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Build {
        #[from]
        source: BuildError,
    },
}

impl CliError {
    #[track_caller]
    pub fn io<P: Into<PathBuf>>(path: P, err: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn input<S: Into<String>>(message: S) -> Self {
        CliError::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// 2 for oversize rejections, 1 for everything else
    pub fn exit_status(&self) -> u8 {
        match self {
            CliError::Build { source } if source.is_oversize() => EXIT_OVERSIZE,
            _ => EXIT_FAILURE,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

impl From<ConfigError> for CliError {
    fn from(source: ConfigError) -> Self {
        CliError::Config { source }
    }
}

pub type CliErrorResult<T> = StdResult<T, CliError>;
