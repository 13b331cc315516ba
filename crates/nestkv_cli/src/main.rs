//! NestKV CLI
//!
//! Interactive shell over an in-memory NestKV store. Nothing is persisted:
//! the store lives for the duration of the process.

use clap::Parser;
use nestkv_cli::{Repl, ReplConfig};
use nestkv_core::Store;
use std::io;
use tracing_subscriber::EnvFilter;

/// Nested-transaction key-value store REPL.
#[derive(Parser)]
#[command(name = "nestkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Prompt printed before each input line
    #[arg(short, long, default_value = "> ")]
    prompt: String,

    /// Keep the case of input lines instead of lower-casing them
    #[arg(long)]
    case_sensitive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries values
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ReplConfig::new()
        .prompt(cli.prompt)
        .case_insensitive(!cli.case_sensitive);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    Repl::new(Store::new(), config).run(stdin.lock(), &mut stdout, &mut stderr)?;

    Ok(())
}
