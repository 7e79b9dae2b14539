//! Graph construction domain
//!
//! Pure logic with no I/O: the graph data model, the platform requirement
//! policy and the analyzer that turns composer.json / composer.lock bytes
//! into a [`domain::DependencyGraph`].

pub mod domain;
pub mod policies;
pub mod services;
