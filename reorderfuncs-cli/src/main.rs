//! reorderfuncs CLI - sorts the test functions of a Go source file alphabetically

// Global invariants enforced:
// - No file is touched unless the input was read and parsed
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{ArgAction, Parser};
use reorderfuncs_core::config;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "reorderfuncs")]
#[command(about = "Reorder the test functions of a Go source file alphabetically")]
#[command(version = env!("REORDERFUNCS_VERSION"))]
struct Cli {
    /// Go source file to reorder
    input: PathBuf,

    /// Where to write the result (default: overwrite INPUT)
    output: Option<PathBuf>,

    /// Name prefix of functions to reorder (overrides config file)
    #[arg(long)]
    prefix: Option<String>,

    /// Path to config file (default: auto-discover next to INPUT)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    // clap exits with status 2 and usage text on a wrong argument count
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let directive = format!("reorderfuncs_core={level},reorderfuncs={level}");

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let output = cli.output.as_deref().unwrap_or(&cli.input);

    let config_dir = config_dir_for(&cli.input);
    let mut resolved = config::load_and_resolve(config_dir, cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(config_path) = &resolved.config_path {
        tracing::info!("using config: {}", config_path.display());
    }

    // CLI flags override config file values
    if let Some(prefix) = &cli.prefix {
        resolved = resolved.with_prefix(prefix).context("invalid --prefix")?;
    }

    let summary = reorderfuncs_core::exec(&cli.input, output, &resolved)?;
    tracing::info!(
        "{} test function(s) in {}{}",
        summary.functions,
        output.display(),
        if summary.changed { "" } else { " (unchanged)" }
    );

    Ok(())
}

/// Directory searched for a config file: the one holding `input`
fn config_dir_for(input: &Path) -> &Path {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
