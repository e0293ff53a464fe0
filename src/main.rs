//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `csfd_parser` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the rendered result
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use csfd_parser::cli::{run, Cli};
use csfd_parser::initialization::init_logger_with;
use csfd_parser::CsfdClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = cli.config();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let client = CsfdClient::new(&config).context("Failed to initialize client")?;

    match run(&cli, &client).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("csfd error: {:#}", e);
            process::exit(1);
        }
    }
}
