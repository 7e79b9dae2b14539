use super::ComposerJson;
use crate::graph_construction::policies::PlatformRequirementPolicy;
use std::collections::BTreeMap;

/// Repository identifier assumed when none has been set
pub const DEFAULT_REPOSITORY_ID: &str = "packagist";

/// Attribute holding the directory a package is installed in
pub const DIR_ATTRIBUTE: &str = "dir";

/// A vertex of the dependency graph
///
/// The name is fixed at creation. Version, source reference and attributes
/// are filled in while the graph is analyzed. Edges live in the owning
/// [`super::DependencyGraph`].
#[derive(Debug, Clone)]
pub struct PackageNode {
    name: String,
    repository_id: Option<String>,
    declared: Option<ComposerJson>,
    version: Option<String>,
    source_reference: Option<String>,
    attributes: BTreeMap<String, String>,
}

impl PackageNode {
    pub fn new(name: impl Into<String>, declared: Option<ComposerJson>) -> Self {
        Self {
            name: name.into(),
            repository_id: None,
            declared,
            version: None,
            source_reference: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Creates a node carrying the given attributes
    pub fn with_attributes(
        name: impl Into<String>,
        declared: Option<ComposerJson>,
        attributes: BTreeMap<String, String>,
    ) -> Self {
        Self {
            attributes,
            ..Self::new(name, declared)
        }
    }

    /// The name as declared, in its original letter case
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The manifest or lock record this node was created from
    ///
    /// `None` for placeholder nodes materialized only by an edge.
    pub fn declared(&self) -> Option<&ComposerJson> {
        self.declared.as_ref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn source_reference(&self) -> Option<&str> {
        self.source_reference.as_deref()
    }

    pub fn set_source_reference(&mut self, reference: impl Into<String>) {
        self.source_reference = Some(reference.into());
    }

    pub fn repository_id(&self) -> &str {
        self.repository_id.as_deref().unwrap_or(DEFAULT_REPOSITORY_ID)
    }

    pub fn set_repository_id(&mut self, repository_id: impl Into<String>) {
        self.repository_id = Some(repository_id.into());
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn has_attribute(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    /// Name disambiguated by repository for installed packages
    ///
    /// Nodes without a `dir` attribute use the bare name; installed nodes use
    /// `{repository_id}.__.{name}`.
    pub fn qualified_name(&self) -> String {
        if !self.has_attribute(DIR_ATTRIBUTE) {
            return self.name.clone();
        }

        [self.repository_id(), "__", self.name.as_str()].join(".")
    }

    /// Whether this node stands for the PHP runtime itself
    pub fn is_platform_runtime(&self) -> bool {
        PlatformRequirementPolicy::is_runtime(&self.qualified_name())
    }

    /// Whether this node stands for a PHP extension
    pub fn is_platform_extension(&self) -> bool {
        PlatformRequirementPolicy::is_extension(&self.qualified_name())
    }

    /// Whether this node's declared dev requirements name `package_name`
    pub fn requires_dev(&self, package_name: &str) -> bool {
        self.declared
            .as_ref()
            .is_some_and(|d| d.requires_dev(package_name))
    }

    /// Whether this node declares that it replaces `package_name`
    pub fn replaces(&self, package_name: &str) -> bool {
        self.declared
            .as_ref()
            .is_some_and(|d| d.replaces(package_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn declared(json: &str) -> Option<ComposerJson> {
        Some(ComposerJson::parse(json.as_bytes()).unwrap())
    }

    #[test]
    fn test_is_platform_runtime() {
        let cases = [
            ("php", true),
            ("Php", true),
            ("PHP", true),
            ("php-foo", false),
            ("php/asdf", false),
            ("asdf", false),
            ("ext-asdf", false),
        ];

        for (name, expected) in cases {
            let node = PackageNode::new(name, None);
            assert_eq!(node.is_platform_runtime(), expected, "name: {}", name);
        }
    }

    #[test]
    fn test_is_platform_extension() {
        let cases = [
            ("ext-foo", true),
            ("Ext-asdf", true),
            ("EXT-bar", true),
            ("ext/foo", false),
            ("php", false),
            ("asdf", false),
        ];

        for (name, expected) in cases {
            let node = PackageNode::new(name, None);
            assert_eq!(node.is_platform_extension(), expected, "name: {}", name);
        }
    }

    #[test]
    fn test_installed_node_is_not_platform() {
        let mut node = PackageNode::new("php", None);
        node.set_attribute(DIR_ATTRIBUTE, "vendor/php");
        assert!(!node.is_platform_runtime());
    }

    #[test]
    fn test_qualified_name_without_dir() {
        let node = PackageNode::new("lib/a", None);
        assert_eq!(node.qualified_name(), "lib/a");
    }

    #[test]
    fn test_qualified_name_with_dir() {
        let mut node = PackageNode::new("lib/a", None);
        node.set_attribute(DIR_ATTRIBUTE, "vendor/lib/a");
        assert_eq!(node.qualified_name(), "packagist.__.lib/a");

        node.set_repository_id("private");
        assert_eq!(node.qualified_name(), "private.__.lib/a");
    }

    #[test]
    fn test_with_attributes() {
        let mut attributes = BTreeMap::new();
        attributes.insert("dir".to_string(), "/srv/app".to_string());
        let node = PackageNode::with_attributes("app", None, attributes);
        assert_eq!(node.attribute("dir"), Some("/srv/app"));
        assert!(node.attribute("missing").is_none());
    }

    #[test]
    fn test_version_and_source_reference() {
        let mut node = PackageNode::new("lib/a", None);
        assert!(node.version().is_none());
        assert!(node.source_reference().is_none());

        node.set_version("1.0.3");
        node.set_source_reference("abc123");
        assert_eq!(node.version(), Some("1.0.3"));
        assert_eq!(node.source_reference(), Some("abc123"));
    }

    #[test]
    fn test_requires_dev_and_replaces() {
        let node = PackageNode::new(
            "acme/bundle",
            declared(r#"{"require-dev": {"Dev/Tool": "1.0"}, "replace": {"acme/part": "*"}}"#),
        );
        assert!(node.requires_dev("dev/tool"));
        assert!(!node.requires_dev("acme/part"));
        assert!(node.replaces("ACME/PART"));

        let placeholder = PackageNode::new("acme/part", None);
        assert!(!placeholder.requires_dev("dev/tool"));
        assert!(!placeholder.replaces("acme/part"));
    }
}
