//! Weftt CLI - A command-line tool for inspecting weft templates.
//!
//! This is the main entry point for the weftt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::lex::{run_lex, LexArgs, OutputFormat};
use error::{Result, WefttError};

/// Weftt - A CLI tool for inspecting weft templates
///
/// Weftt scans template files and reports their lexical structure,
/// which is useful for debugging templates and template tooling.
#[derive(Parser, Debug)]
#[command(name = "weftt")]
#[command(author = "Weft Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for inspecting weft templates", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "WEFTT_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, global = true, env = "WEFTT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the weftt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan a template and print its item stream
    ///
    /// Reads the template file, scans it to completion, and prints each
    /// lexical item. A scan error is reported against the source line it
    /// occurred on and makes the command fail.
    Lex(LexCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Template file to scan
    file: PathBuf,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

/// Main entry point for the weftt CLI.
///
/// Parses command-line arguments, initializes logging, and dispatches to
/// the appropriate command handler.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("weftt: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.no_color)?;
    match cli.command {
        Commands::Lex(args) => run_lex(LexArgs {
            verbose: cli.verbose,
            file: args.file,
            format: args.format,
        }),
    }
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
///
/// # Returns
/// * `Result<()>` - Success or an error
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| WefttError::Logging(format!("failed to initialize logging: {e}")))?;

    Ok(())
}
