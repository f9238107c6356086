//! sbm - broker message preview
//!
//! Builds one message with the configured builder and prints what would be
//! handed to the transport.
//!
//! # Examples
//!
//! ```bash
//! # Preview a standard message from a file
//! sbm build --type OrderPlaced --input order.json --pretty
//!
//! # Legacy convention from stdin, with payload logging
//! echo '{"order_id": 7}' | sbm build --type OrderPlaced --legacy --verbose
//!
//! # Validate configuration
//! sbm check-config
//! ```

use sbm_cli::{
    Cli, CliErrorResult, Commands, logger,
    preview::{self, PreviewMessage},
};

use sbm_builder::register_message_builder;
use sbm_config::Config;
use sbm_core::{Encoding, TypeDiscriminator};

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

async fn run(cli: Cli) -> CliErrorResult<()> {
    let config = load_config(cli.verbose)?;

    match cli.command {
        Commands::Build {
            r#type,
            legacy,
            queue,
            input,
        } => {
            let builder = register_message_builder(&config);
            let contents = preview::read_input(&input)?;
            let message =
                PreviewMessage::parse(&contents, &queue, Encoding::from_legacy_flag(legacy))?;

            let report =
                preview::run_build(builder, message, TypeDiscriminator::new(r#type)).await?;
            println!("{}", preview::render_report(&report, cli.pretty)?);
        }
        Commands::CheckConfig => {
            config.log_summary();
        }
    }

    Ok(())
}

/// Load, validate and install logging in the order the rest of the run expects.
fn load_config(verbose: bool) -> CliErrorResult<Config> {
    let mut config = Config::load()?;

    if verbose {
        preview::apply_verbose(&mut config);
    }

    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;

    Ok(config)
}
