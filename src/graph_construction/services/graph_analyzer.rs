use crate::graph_construction::domain::{
    ComposerJson, ComposerLock, DependencyGraph, PackageNode, DIR_ATTRIBUTE, ROOT_PACKAGE_NAME,
};
use crate::graph_construction::policies::PlatformRequirementPolicy;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::path::Path;
use tracing::{debug, info, warn};

/// Install directory used when composer.json does not configure `vendor-dir`
pub const DEFAULT_VENDOR_DIR: &str = "vendor";

/// Version metadata copied from a lock record onto its node
struct LockedMetadata {
    name: String,
    version: Option<String>,
    source_reference: Option<String>,
}

impl LockedMetadata {
    fn from_record(name: &str, record: &ComposerJson) -> Self {
        Self {
            name: name.to_string(),
            version: record.locked_version().map(str::to_string),
            source_reference: record.source_reference().map(str::to_string),
        }
    }
}

/// GraphAnalyzer service building a dependency graph from Composer data
///
/// This service is pure: it works on bytes already read by the caller and
/// owns the graph it returns. Every call is independent.
pub struct GraphAnalyzer;

impl GraphAnalyzer {
    /// Builds the dependency graph for one project
    ///
    /// # Arguments
    /// * `manifest_data` - Content of composer.json
    /// * `lock_data` - Content of composer.lock, or `None` if there is no lock file
    /// * `root_dir` - Project directory, recorded as the root's `dir` attribute
    ///   and used to compute install directories
    ///
    /// # Errors
    /// - [`GraphError::ManifestParseError`] / [`GraphError::LockfileParseError`] for malformed input
    /// - [`GraphError::MissingLockData`] when non-platform dependencies are
    ///   declared but there is no lock data
    pub fn analyze_from_data(
        manifest_data: &[u8],
        lock_data: Option<&[u8]>,
        root_dir: &Path,
    ) -> Result<DependencyGraph> {
        let mut manifest = ComposerJson::parse(manifest_data)?;
        let root_name = manifest
            .declared_name()
            .unwrap_or(ROOT_PACKAGE_NAME)
            .to_string();
        manifest.name = Some(root_name.clone());

        let graph = match lock_data {
            None => Self::analyze_without_lock(root_name, manifest, root_dir)?,
            Some(lock_data) => Self::analyze_with_lock(root_name, manifest, lock_data, root_dir)?,
        };

        info!(
            root = graph.root().name(),
            packages = graph.package_count(),
            edges = graph.edge_count(),
            "dependency graph built"
        );

        Ok(graph)
    }

    /// Without composer.lock, only platform requirements can be represented
    fn analyze_without_lock(
        root_name: String,
        manifest: ComposerJson,
        root_dir: &Path,
    ) -> Result<DependencyGraph> {
        let userland = PlatformRequirementPolicy::userland_requirements(&manifest);
        if !userland.is_empty() {
            return Err(GraphError::MissingLockData {
                packages: userland.into_iter().map(str::to_string).collect(),
            }
            .into());
        }

        let requirements = Self::owned_requirements(&manifest);
        let mut graph = Self::graph_with_root(root_name.clone(), manifest, root_dir);

        // Composer writes no lock file for php / ext-* only projects, so
        // these are connected by name without any resolution.
        for (name, constraint) in requirements {
            graph.connect(&root_name, &name, &constraint);
        }

        Ok(graph)
    }

    fn analyze_with_lock(
        root_name: String,
        manifest: ComposerJson,
        lock_data: &[u8],
        root_dir: &Path,
    ) -> Result<DependencyGraph> {
        let vendor_dir = root_dir.join(manifest.vendor_dir().unwrap_or(DEFAULT_VENDOR_DIR));
        let lock = ComposerLock::parse(lock_data)?;

        let mut graph = Self::graph_with_root(root_name, manifest, root_dir);
        Self::add_packages(&mut graph, lock, &vendor_dir)?;
        Self::connect_declared_requirements(&mut graph);

        Ok(graph)
    }

    fn graph_with_root(root_name: String, manifest: ComposerJson, root_dir: &Path) -> DependencyGraph {
        let mut root = PackageNode::new(root_name, Some(manifest));
        root.set_attribute(DIR_ATTRIBUTE, root_dir.display().to_string());
        DependencyGraph::new(Some(root))
    }

    /// Creates one node per lock record, main list first, then dev list
    ///
    /// Names already in the graph, including the root's, keep their first node.
    fn add_packages(graph: &mut DependencyGraph, lock: ComposerLock, vendor_dir: &Path) -> Result<()> {
        for record in lock.into_records() {
            let Some(name) = record.package_name().map(str::to_string) else {
                warn!("skipping composer.lock record without a package name");
                continue;
            };

            if graph.is_root_name(&name) || graph.has(&name) {
                debug!(package = %name, "skipping already registered package");
                continue;
            }

            let locked = LockedMetadata::from_record(&name, &record);
            let id = graph.create(&name, Some(record))?;

            let install_dir = vendor_dir.join(&name);
            graph
                .node_mut(id)
                .set_attribute(DIR_ATTRIBUTE, install_dir.display().to_string());

            Self::apply_locked_metadata(graph, &locked);
        }

        Ok(())
    }

    /// Sets the resolved version and, when it differs, the source reference
    fn apply_locked_metadata(graph: &mut DependencyGraph, locked: &LockedMetadata) {
        let Some(node) = graph.get_mut(&locked.name) else {
            return;
        };

        let version = locked.version.as_deref().unwrap_or_default();
        if let Some(version) = &locked.version {
            node.set_version(version.as_str());
        }

        if let Some(reference) = &locked.source_reference {
            if reference != version {
                node.set_source_reference(reference.as_str());
            }
        }
    }

    /// Connects the runtime and dev requirements of every node present now
    fn connect_declared_requirements(graph: &mut DependencyGraph) {
        let sources: Vec<(String, Vec<(String, String)>)> = graph
            .packages()
            .filter_map(|(_, node)| {
                node.declared()
                    .map(|declared| (node.name().to_string(), Self::owned_requirements(declared)))
            })
            .collect();

        for (source, requirements) in sources {
            for (name, constraint) in requirements {
                Self::connect(graph, &source, &name, &constraint);
            }
        }
    }

    /// Connects `source` to the node standing for requirement `name`
    ///
    /// Precedence: a node with that name, then a node that replaces it, then
    /// a new empty placeholder. A placeholder means the package is only
    /// installed in dev mode of some dependency and carries no lock data.
    fn connect(graph: &mut DependencyGraph, source: &str, name: &str, constraint: &str) {
        if graph.has(name) {
            graph.connect(source, name, constraint);
            return;
        }

        if let Some(aggregate) = graph.find_aggregate_containing(name) {
            let aggregate = graph.node(aggregate).name().to_string();
            debug!(
                source,
                requirement = name,
                aggregate = %aggregate,
                "requirement resolved through replacing package"
            );
            graph.connect(source, &aggregate, constraint);
            return;
        }

        debug!(source, requirement = name, "requirement has no locked package");
        graph.connect(source, name, constraint);
    }

    fn owned_requirements(declared: &ComposerJson) -> Vec<(String, String)> {
        declared
            .all_requirements()
            .map(|(name, constraint)| (name.to_string(), constraint.to_string()))
            .collect()
    }
}
