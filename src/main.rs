//! CLI entry point for the grabfile tool.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use grabfile_core::{
    Console, DisplayConfig, Downloader, HttpClient, Outcome, Prompter, TerminalReporter,
};
use tracing::{debug, info};

mod cli;

use cli::{Args, usage_lines};

/// Seconds of warning before downloading into the current directory.
const DEFAULT_COUNTDOWN_SECS: u64 = 5;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let Some(invocation) = args.invocation() else {
        let console = Console::new(DisplayConfig::plain());
        for line in usage_lines(env!("CARGO_BIN_NAME")) {
            console.plain(&line);
        }
        return Ok(ExitCode::SUCCESS);
    };

    let color = !args.no_color && console::Term::stderr().is_term();
    let console = Console::new(DisplayConfig::default().with_color(color));

    let destination = match invocation.destination {
        Some(dir) => dir,
        None => {
            console
                .countdown(DEFAULT_COUNTDOWN_SECS, |remaining| {
                    format!(
                        "No destination directory given, assuming current directory. You have {remaining} seconds to cancel."
                    )
                })
                .await;
            PathBuf::from(".")
        }
    };

    let client = HttpClient::new().context("failed to build HTTP client")?;
    let downloader = Downloader::new(client);
    let mut prompter = Prompter::stdin(console.clone());
    let mut reporter = TerminalReporter::new(console.clone());

    let result = downloader
        .download(
            &invocation.source_url,
            &destination,
            &mut prompter,
            &mut reporter,
        )
        .await;
    drop(reporter);

    Ok(report_outcome(&console, Outcome::from(result)))
}

/// Prints the terminal outcome and maps it to the process exit code.
fn report_outcome(console: &Console, outcome: Outcome) -> ExitCode {
    let code = if outcome.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    };

    match outcome {
        Outcome::Success(path) => {
            info!(path = %path.display(), "finished");
        }
        Outcome::Cancelled(path) => {
            console.warning(&format!("Download cancelled, keeping {}", path.display()));
        }
        Outcome::Failed { path, error } => {
            console.error(&error.to_string());
            if let Some(path) = path {
                console.info(&format!("Destination was {}", path.display()));
            }
        }
    }
    code
}
