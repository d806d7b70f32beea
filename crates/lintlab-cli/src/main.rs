//! lintlab - plant, clean up, and verify synthetic static-analysis
//! findings in a sample repository.
//!
//! # Usage
//!
//! ```bash
//! # Plant the duplicate-exports fixture
//! lintlab --mode create --scenario duplicate-exports
//!
//! # Check the analyzer reports it
//! lintlab --mode verify --scenario duplicate-exports
//!
//! # Restore the repository
//! lintlab --mode cleanup --scenario duplicate-exports
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use lintlab_cli::{commands, output};
use lintlab_core::{LabConfig, Scenario};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lintlab")]
#[command(about = "Scenario controller for static-analysis demos", long_about = None)]
#[command(version)]
struct Cli {
    /// What to do with the scenario
    #[arg(long, value_enum)]
    mode: Mode,

    /// Scenario key, e.g. "duplicate-exports"
    #[arg(long)]
    scenario: String,

    /// Fixture directory (default: <lab root>/<scenario subdirectory>)
    #[arg(long)]
    target_root: Option<PathBuf>,

    /// Sample repository root (default: current directory)
    #[arg(long, env = "LINTLAB_REPO_ROOT")]
    repo_root: Option<PathBuf>,

    /// Configuration file path (lintlab.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Plant the synthetic issue
    Create,
    /// Remove everything the scenario planted
    Cleanup,
    /// Run the analyzer and check the issue is reported
    Verify,
}

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            output::error(format!("{e:#}"));
            process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let repo_root = match cli.repo_root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let config = match cli.config {
        Some(path) => LabConfig::from_file(&path, repo_root)?,
        None => LabConfig::for_repo(repo_root),
    };

    let scenario = Scenario::lookup(&cli.scenario)?;
    let target_root = cli
        .target_root
        .unwrap_or_else(|| scenario.target_root(&config));

    match cli.mode {
        Mode::Create => {
            commands::create(scenario, &config, &target_root)?;
            Ok(0)
        }
        Mode::Cleanup => {
            commands::cleanup(scenario, &config, &target_root)?;
            Ok(0)
        }
        Mode::Verify => commands::verify(scenario, &config, &target_root),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("lintlab=debug,lintlab_core=debug,info")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("lintlab=info,lintlab_core=info,warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
