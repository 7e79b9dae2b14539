/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_request;
mod output_format;
mod project_analysis;

pub use analysis_request::AnalysisRequest;
pub use output_format::OutputFormat;
pub use project_analysis::ProjectAnalysis;
