use super::ComposerJson;
use crate::shared::error::GraphError;
use crate::shared::Result;
use serde::Deserialize;

/// File name of the lock file
pub const LOCK_FILE_NAME: &str = "composer.lock";

/// Parsed composer.lock
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerLock {
    pub packages: Option<Vec<ComposerJson>>,
    #[serde(rename = "packages-dev")]
    pub packages_dev: Option<Vec<ComposerJson>>,
}

impl ComposerLock {
    /// Parses composer.lock content
    ///
    /// # Errors
    /// Returns [`GraphError::LockfileParseError`] if the content is not a valid lock file
    pub fn parse(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| {
            GraphError::LockfileParseError {
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Consumes the lock, yielding the main package list followed by the dev list
    pub fn into_records(self) -> impl Iterator<Item = ComposerJson> {
        self.packages
            .into_iter()
            .flatten()
            .chain(self.packages_dev.into_iter().flatten())
    }
}
