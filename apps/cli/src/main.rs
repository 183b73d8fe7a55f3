mod cli;
mod commands;
mod dto;
mod render;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use geneinsight_core::{AnalysisError, InputShapeError};
use geneinsight_formats::ParseError;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands};
use crate::commands::UsageError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Status(args) => Ok(commands::status::run(args)),
        Commands::Genes => Ok(commands::catalog::genes()),
        Commands::Species => Ok(commands::catalog::species()),
    };

    match result {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()) {
                error!(error = %e, "failed to write output");
                return ExitCode::from(1);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code(&e))
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }
}

/// 2 for rejected input, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> u8 {
    let input_error = err.chain().any(|cause| {
        cause.is::<InputShapeError>()
            || cause.is::<ParseError>()
            || cause.is::<UsageError>()
            || cause
                .downcast_ref::<AnalysisError>()
                .is_some_and(AnalysisError::is_input_error)
    });
    if input_error {
        2
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let shape = anyhow::Error::from(InputShapeError::EmptySequence);
        assert_eq!(exit_code(&shape), 2);

        let parse = anyhow::Error::from(ParseError::EmptyInput).context("reading input");
        assert_eq!(exit_code(&parse), 2);

        let usage = anyhow::Error::from(UsageError::RecordNotFound("x".to_string()));
        assert_eq!(exit_code(&usage), 2);

        let wrapped = anyhow::Error::from(AnalysisError::from(InputShapeError::EmptySpecies));
        assert_eq!(exit_code(&wrapped), 2);

        let fault = anyhow::Error::from(AnalysisError::InternalFault("broken".to_string()));
        assert_eq!(exit_code(&fault), 1);
    }
}
