// src/bin/tracker.rs
use std::process::ExitCode;

use academy_tracker::cli;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    cli::run_tracker()
}
