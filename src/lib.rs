//! composer-graph - dependency graph builder for PHP Composer projects
//!
//! This library reads a project's composer.json and composer.lock and builds
//! a directed graph of packages whose edges carry the declared version
//! constraints, following hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! - **Domain Layer** (`graph_construction`): graph model, platform policy and analyzer
//! - **Application Layer** (`application`): use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use composer_graph::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = AnalyzeProjectUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     ComposerInstaller::default(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let analysis = use_case.execute(AnalysisRequest::new(PathBuf::from(".")))?;
//!
//! let model = GraphReadModelBuilder::new().build(analysis.graph());
//! let output = TextFormatter::new().format(&model)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The analyzer can also be used directly on in-memory data:
//!
//! ```
//! use composer_graph::graph_construction::services::GraphAnalyzer;
//! use std::path::Path;
//!
//! let graph = GraphAnalyzer::analyze_from_data(
//!     br#"{"require": {"php": ">=8.1"}}"#,
//!     None,
//!     Path::new("."),
//! )
//! .unwrap();
//! assert_eq!(graph.root().name(), "__root");
//! assert!(graph.has("php"));
//! ```

pub mod adapters;
pub mod application;
pub mod graph_construction;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::process::ComposerInstaller;
    pub use crate::application::dto::{AnalysisRequest, OutputFormat, ProjectAnalysis};
    pub use crate::application::read_models::{GraphReadModel, GraphReadModelBuilder};
    pub use crate::application::use_cases::AnalyzeProjectUseCase;
    pub use crate::graph_construction::domain::{
        ComposerJson, ComposerLock, DependencyEdge, DependencyGraph, PackageNode,
    };
    pub use crate::graph_construction::policies::PlatformRequirementPolicy;
    pub use crate::graph_construction::services::GraphAnalyzer;
    pub use crate::ports::inbound::GraphAnalysisPort;
    pub use crate::ports::outbound::{
        DependencyInstaller, GraphFormatter, LockfileReader, ManifestReader, OutputPresenter,
        ProgressReporter,
    };
    pub use crate::shared::error::{ExitCode, GraphError};
    pub use crate::shared::Result;
}
