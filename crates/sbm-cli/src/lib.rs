//! sbm-cli library
//!
//! Command definitions and the preview pipeline behind the `sbm` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod preview;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, CliErrorResult};
pub use preview::{PreviewMessage, PreviewReport};
