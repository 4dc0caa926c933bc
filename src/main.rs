use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use tracing_subscriber::EnvFilter;

use kona::{compile, display_error, printer};

const USAGE: &str = "Usage: kona [script]";

/// Lexes and parses a Kona script, printing its tokens and syntax tree.
#[derive(Parser, Debug)]
#[command(name = "kona", version, long_about = None)]
struct Cli {
    /// Script to read
    script: Option<PathBuf>,

    /// Do not print the token list before the syntax tree
    #[arg(long)]
    quiet_tokens: bool,
}

fn main() -> Result<ExitCode> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            error.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(_) => {
            println!("{}", USAGE);
            return Ok(ExitCode::from(64));
        }
    };

    // Interactive mode is reserved
    let Some(path) = cli.script else {
        println!("{}", USAGE);
        return Ok(ExitCode::SUCCESS);
    };

    let source = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    tracing::debug!("read {} bytes from {}", source.len(), path.display());

    Ok(run(&source, !cli.quiet_tokens))
}

fn run(source: &str, show_tokens: bool) -> ExitCode {
    let compilation = compile(source);

    if show_tokens {
        for token in &compilation.tokens {
            println!("{}", token);
        }
    }

    if compilation.had_error() {
        for error in &compilation.diagnostics {
            eprintln!("{}", display_error(error, source));
        }
        return ExitCode::from(65);
    }

    println!("{}", printer::print(&compilation.root));
    ExitCode::SUCCESS
}
