use std::process::ExitCode;

use clap::Parser;
use textsim::cli::{self, Args, CliError};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // --help and --version also arrive here and are not failures.
            if !err.use_stderr() {
                return ExitCode::SUCCESS;
            }
            let err = CliError::InvalidArguments(err.kind().to_string());
            return ExitCode::from(err.exit_code());
        }
    };

    match cli::run(&args) {
        Ok(outcome) => {
            println!("{}", outcome.percentage);
            if args.json {
                match serde_json::to_string_pretty(&outcome.report) {
                    Ok(json) => println!("{json}"),
                    Err(err) => {
                        let err = CliError::Internal(err.to_string());
                        eprintln!("error: {err}");
                        return ExitCode::from(err.exit_code());
                    }
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "run_failed");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
