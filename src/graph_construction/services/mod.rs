mod graph_analyzer;

pub use graph_analyzer::{GraphAnalyzer, DEFAULT_VENDOR_DIR};
