use clap::{Parser, Subcommand};
use code_snapshot::{config, output, snapshot};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "code-snapshot")]
#[command(about = "Write a markdown snapshot of a codebase")]
#[command(long_about = "\
Write a markdown snapshot of a codebase

Walks the scan root, skips excluded directories, excluded file names and
binary extensions, and copies the first lines of every remaining text file
into a single markdown document, one fenced block per file.

Settings are read from code-snapshot.toml in the scan root when present.
Run 'code-snapshot gen-config' to print a documented config file.")]
#[command(version)]
struct Cli {
    /// Directory to scan [default: .]
    #[arg(long)]
    root: Option<PathBuf>,

    /// Snapshot file to write [default: code_snapshot.md]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Lines copied from the top of each file [default: 75]
    #[arg(long)]
    max_lines: Option<usize>,

    /// Config file [default: <root>/code-snapshot.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan the tree and write the snapshot (the default)
    Snapshot,
    /// Print a stock code-snapshot.toml with all options documented
    GenConfig,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.as_ref().unwrap_or(&Command::Snapshot) {
        Command::Snapshot => {
            let config = resolve_config(&cli)?;
            Ok(run_snapshot(&config))
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Stock defaults ← config file ← command-line flags.
fn resolve_config(cli: &Cli) -> Result<config::SnapshotConfig, config::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => {
            let root = cli.root.clone().unwrap_or_else(|| PathBuf::from("."));
            config::load_root_config(&root)?
        }
    };

    if let Some(root) = &cli.root {
        config.root = root.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(max_lines) = cli.max_lines {
        config.max_lines = max_lines;
    }
    config.validate()?;
    Ok(config)
}

fn run_snapshot(config: &config::SnapshotConfig) -> ExitCode {
    output::print_start(config);
    let start = Instant::now();

    let result = snapshot::snapshot(config, output::print_event);

    match result.write_to(&config.output) {
        Ok(()) => {
            output::print_success(result.file_count(), start.elapsed(), &config.output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            output::print_write_error(&err);
            ExitCode::FAILURE
        }
    }
}
