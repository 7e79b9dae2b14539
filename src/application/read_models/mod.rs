//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized, deterministically ordered representation of the
//! dependency graph for formatters.

mod graph_read_model;
mod graph_read_model_builder;

pub use graph_read_model::{EdgeView, GraphMetadataView, GraphReadModel, PackageView};
pub use graph_read_model_builder::GraphReadModelBuilder;
