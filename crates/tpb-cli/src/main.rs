//! Unofficial command-line client for The Pirate Bay.
//!
//! Layout:
//! - `cli.rs`: argument parsing and command dispatch
//! - `output.rs`: text and JSON renderers
//! - `logging.rs`: tracing subscriber setup
//! - `main.rs`: thin entrypoint

mod cli;
mod logging;
mod output;

use std::io;
use std::process::ExitCode;

use clap::Parser;

use crate::cli::{Cli, dispatch};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut stdout = io::stdout().lock();
    match dispatch(cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
