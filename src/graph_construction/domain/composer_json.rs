use crate::shared::error::GraphError;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Deserialize;

/// File name of the project manifest
pub const MANIFEST_FILE_NAME: &str = "composer.json";

/// Requirement name to version constraint, in declaration order
pub type RequirementMap = IndexMap<String, String>;

/// Parsed composer.json, or a single package record from composer.lock
///
/// Lock records reuse the manifest shape and add `version` and `source`.
/// Unknown fields are ignored; malformed JSON is rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerJson {
    pub name: Option<String>,
    pub require: Option<RequirementMap>,
    #[serde(rename = "require-dev")]
    pub require_dev: Option<RequirementMap>,
    pub replace: Option<RequirementMap>,
    pub config: Option<ComposerConfig>,

    // composer.lock fields
    pub package: Option<String>,
    pub version: Option<String>,
    pub source: Option<SourceData>,
}

/// The `config` section of composer.json
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComposerConfig {
    #[serde(rename = "vendor-dir")]
    pub vendor_dir: Option<String>,
}

/// Where a locked package was fetched from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceData {
    #[serde(rename = "type")]
    pub source_type: Option<String>,
    pub url: Option<String>,
    pub reference: Option<String>,
}

impl ComposerJson {
    /// Parses composer.json content
    ///
    /// # Errors
    /// Returns [`GraphError::ManifestParseError`] if the content is not a valid manifest
    pub fn parse(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(|e| {
            GraphError::ManifestParseError {
                details: e.to_string(),
            }
            .into()
        })
    }

    /// The declared package name, if any and non-empty
    pub fn declared_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// Identity of a lock record: `name`, falling back to `package`
    pub fn package_name(&self) -> Option<&str> {
        self.declared_name()
            .or_else(|| self.package.as_deref().filter(|p| !p.is_empty()))
    }

    pub fn requirements(&self) -> impl Iterator<Item = (&str, &str)> {
        Self::entries(self.require.as_ref())
    }

    pub fn dev_requirements(&self) -> impl Iterator<Item = (&str, &str)> {
        Self::entries(self.require_dev.as_ref())
    }

    /// Runtime requirements followed by dev requirements
    pub fn all_requirements(&self) -> impl Iterator<Item = (&str, &str)> {
        self.requirements().chain(self.dev_requirements())
    }

    /// Whether `name` is a key of the dev requirements (case-insensitive)
    pub fn requires_dev(&self, name: &str) -> bool {
        Self::contains_key(self.require_dev.as_ref(), name)
    }

    /// Whether `name` is a key of the replace map (case-insensitive)
    pub fn replaces(&self, name: &str) -> bool {
        Self::contains_key(self.replace.as_ref(), name)
    }

    /// Configured install directory (`config.vendor-dir`), if set and non-empty
    pub fn vendor_dir(&self) -> Option<&str> {
        self.config
            .as_ref()
            .and_then(|c| c.vendor_dir.as_deref())
            .filter(|d| !d.is_empty())
    }

    /// Locked version, treating an empty string as absent
    pub fn locked_version(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    pub fn source_reference(&self) -> Option<&str> {
        self.source
            .as_ref()
            .and_then(|s| s.reference.as_deref())
            .filter(|r| !r.is_empty())
    }

    fn entries(map: Option<&RequirementMap>) -> impl Iterator<Item = (&str, &str)> {
        map.into_iter()
            .flat_map(|m| m.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    fn contains_key(map: Option<&RequirementMap>, name: &str) -> bool {
        let needle = name.to_lowercase();
        map.is_some_and(|m| m.keys().any(|k| k.to_lowercase() == needle))
    }
}
