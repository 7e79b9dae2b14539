use crate::application::read_models::GraphReadModel;
use crate::shared::Result;

/// GraphFormatter port for rendering a dependency graph
///
/// This port abstracts the presentation of the graph (plain text dump,
/// JSON document). Formatters work on the sorted read model so every
/// format renders identical input identically.
pub trait GraphFormatter {
    /// Formats the graph read model
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &GraphReadModel) -> Result<String>;
}
