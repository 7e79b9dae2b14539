/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, composer binary, console).
pub mod dependency_installer;
pub mod formatter;
pub mod lockfile_reader;
pub mod manifest_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use dependency_installer::DependencyInstaller;
pub use formatter::GraphFormatter;
pub use lockfile_reader::LockfileReader;
pub use manifest_reader::ManifestReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
