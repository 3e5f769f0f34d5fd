use clap::{ArgAction, Parser, Subcommand};
use instmeta_kernel::MAX_DER_ORDER;

#[derive(Parser)]
#[command(
    name = "instmeta",
    about = "instmeta: explicit-instantiation metadata for igatools from a dimension table",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive every instantiation list from a dimension table
    Derive {
        /// Path to the dimension table
        #[arg(long)]
        config_file: String,

        /// Highest derivative order to instantiate (overrides the settings file)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DER_ORDER)))]
        max_der_order: Option<u32>,

        /// Write the generated file here instead of stdout
        #[arg(long)]
        out_file: Option<String>,

        /// Optional TOML settings file
        #[arg(long)]
        settings: Option<String>,

        /// Program name cited in the generated header (defaults to this binary)
        #[arg(long)]
        script_name: Option<String>,

        /// Fail on malformed table lines instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Print the derived manifest as JSON
        #[arg(long)]
        json: bool,
    },

    /// Build-system form: config_file=<path> max_der_order=<n> out_file=<path>
    Script {
        /// key=value invocation parameters
        #[arg(required = true)]
        pairs: Vec<String>,

        /// Optional TOML settings file
        #[arg(long)]
        settings: Option<String>,

        /// Fail on malformed table lines instead of skipping them
        #[arg(long)]
        strict: bool,
    },

    /// Print the user, face and unified row tables
    Table {
        /// Path to the dimension table
        #[arg(long)]
        config_file: String,

        /// Fail on malformed table lines instead of skipping them
        #[arg(long)]
        strict: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
