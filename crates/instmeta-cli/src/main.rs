//! instmeta CLI: the `instmeta` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Derive {
            config_file,
            max_der_order,
            out_file,
            settings,
            script_name,
            strict,
            json,
        } => commands::derive::run(commands::derive::Args {
            config_file,
            max_der_order,
            out_file,
            settings,
            script_name,
            strict,
            json,
        }),

        Commands::Script {
            pairs,
            settings,
            strict,
        } => commands::script::run(pairs, settings, strict),

        Commands::Table {
            config_file,
            strict,
            json,
        } => commands::table::run(config_file, strict, json),
    }
}
