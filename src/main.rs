mod cli;
mod config;

use cli::Args;
use composer_graph::adapters::outbound::console::StderrProgressReporter;
use composer_graph::adapters::outbound::filesystem::FileSystemReader;
use composer_graph::adapters::outbound::process::ComposerInstaller;
use composer_graph::application::dto::{AnalysisRequest, ProjectAnalysis};
use composer_graph::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use composer_graph::application::read_models::GraphReadModelBuilder;
use composer_graph::application::use_cases::AnalyzeProjectUseCase;
use composer_graph::shared::error::{ExitCode, GraphError};
use composer_graph::shared::Result;
use config::Settings;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();
    setup_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("composer_graph={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let project_path = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    validate_project_path(&project_path)?;

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(&project_path)?,
    };
    let settings = Settings::resolve(&args, config.as_ref())?;

    // Create adapters (Dependency Injection)
    let use_case = AnalyzeProjectUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        ComposerInstaller::new(settings.composer_binary.clone()),
        StderrProgressReporter::new(),
    );

    let request = AnalysisRequest::new(project_path)
        .with_install_missing_lock(settings.install_missing_lock);

    let graph = match use_case.execute(request)? {
        ProjectAnalysis::Complete(graph) => graph,
        ProjectAnalysis::ManifestMissing { graph, .. } => graph,
    };

    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    let model = GraphReadModelBuilder::new()
        .include_dev(settings.include_dev)
        .build(&graph);
    let formatted_output = FormatterFactory::create(settings.format).format(&model)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| GraphError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
