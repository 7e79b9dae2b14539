/// Crate-wide Result alias.
///
/// Typed failures are raised as [`crate::shared::error::GraphError`] and
/// recovered by callers with `downcast_ref`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
