//! testsql - load the seed users and print paginated keyword searches.

use clap::Parser;
use std::io;
use std::process::ExitCode;
use testsql::{Cli, report, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only search output.
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let result = run(&cli, &mut io::stdout().lock());
    ExitCode::from(report(&result, &mut io::stderr().lock()))
}
