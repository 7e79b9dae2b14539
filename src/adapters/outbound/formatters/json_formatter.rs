use crate::application::read_models::GraphReadModel;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        serde_json::to_string_pretty(model)
            .map_err(|e| anyhow::anyhow!("Failed to serialize dependency graph to JSON: {}", e))
    }
}
