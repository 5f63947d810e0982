//! fixdec - command-line calculator for fixed-point decimals.

mod cli;
mod command;
mod config;
mod error;
mod expr;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Settings;
use logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    init_logging(settings.log.as_deref())?;

    let report = command::execute(&cli.command, &settings)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    Ok(())
}
