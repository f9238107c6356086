use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "sbm")]
#[command(about = "Preview broker messages exactly as the builder would send them")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Turn on broker payload logging (pretty bodies, debug payload logs)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Pretty-print the JSON report
    #[arg(long, global = true)]
    pub pretty: bool,
}
