use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build one message from a JSON object and print the resulting envelope
    Build {
        /// Type discriminator written to the "type" property
        #[arg(long = "type")]
        r#type: String,

        /// Use the legacy serializer convention
        #[arg(long)]
        legacy: bool,

        /// Destination queue name
        #[arg(long, default_value = "preview")]
        queue: String,

        /// JSON input file, or "-" for stdin
        #[arg(long, default_value = "-")]
        input: String,
    },

    /// Load and validate configuration, then log the summary
    CheckConfig,
}
