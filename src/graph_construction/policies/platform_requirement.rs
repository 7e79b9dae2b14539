use crate::graph_construction::domain::ComposerJson;

/// PlatformRequirementPolicy for requirements Composer never installs
///
/// The PHP runtime (`php`) and PHP extensions (`ext-*`) are provided by the
/// platform. A project requiring only these does not get a composer.lock, so
/// their presence alone never demands lock data. All comparisons ignore case.
pub struct PlatformRequirementPolicy;

impl PlatformRequirementPolicy {
    /// Identifier of the runtime pseudo-package
    pub const RUNTIME_PACKAGE: &'static str = "php";

    /// Prefix of extension pseudo-packages
    pub const EXTENSION_PREFIX: &'static str = "ext-";

    pub fn is_runtime(name: &str) -> bool {
        name.to_lowercase() == Self::RUNTIME_PACKAGE
    }

    pub fn is_extension(name: &str) -> bool {
        name.to_lowercase().starts_with(Self::EXTENSION_PREFIX)
    }

    /// Whether `name` is provided by the platform rather than installed
    pub fn is_platform_requirement(name: &str) -> bool {
        Self::is_runtime(name) || Self::is_extension(name)
    }

    /// Runtime and dev requirements of `manifest` that need lock data to resolve
    ///
    /// # Returns
    /// Requirement names in declaration order, runtime first
    pub fn userland_requirements(manifest: &ComposerJson) -> Vec<&str> {
        manifest
            .all_requirements()
            .map(|(name, _)| name)
            .filter(|name| !Self::is_platform_requirement(name))
            .collect()
    }
}
