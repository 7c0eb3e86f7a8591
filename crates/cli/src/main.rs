// crates/cli/src/main.rs
use std::{io, process::ExitCode};

use changed_files_cli::{args::Args, config::Config, logging};
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_tracing(args.logging.verbose, args.logging.quiet);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::from(2);
        }
    };

    let outcome = changed_files_cli::run(&config)
        .and_then(|report| report.write_to(&mut io::stdout().lock()).map(|()| report.status));

    match outcome {
        Ok(status) => ExitCode::from(status.exit_code()),
        Err(e) => {
            error!(error = %e, "run failed");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
