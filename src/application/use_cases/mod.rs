/// Use cases - Application business logic orchestration
mod analyze_project;

pub use analyze_project::AnalyzeProjectUseCase;
