use clap::Parser;
use composer_graph::application::dto::OutputFormat;
use std::path::PathBuf;

/// Build the dependency graph of a PHP Composer project
#[derive(Parser, Debug)]
#[command(name = "composer-graph")]
#[command(version)]
#[command(
    about = "Build the dependency graph of a PHP Composer project from composer.json and composer.lock",
    long_about = None
)]
pub struct Args {
    /// Output format: text or json [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Run `composer install` when composer.lock is missing
    #[arg(long)]
    pub install: bool,

    /// Composer executable used by --install
    #[arg(long = "composer-bin", value_name = "PATH")]
    pub composer_bin: Option<String>,

    /// Leave require-dev edges out of the output
    #[arg(long = "no-dev")]
    pub no_dev: bool,

    /// Configuration file (defaults to composer-graph.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
