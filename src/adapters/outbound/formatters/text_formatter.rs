use crate::application::read_models::{GraphReadModel, PackageView};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// TextFormatter adapter producing the plain text graph dump
///
/// One block per package, root first. Each block is the package name
/// (suffixed with ` (Root)` for the root), an `=` underline of the same
/// length, a `Version:` line, an optional `Source-Reference:` line and one
/// `-> dest` line per out-edge. Blocks are separated by a blank line.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_package(output: &mut String, package: &PackageView) {
        let mut heading = package.name.clone();
        if package.is_root {
            heading.push_str(" (Root)");
        }

        output.push_str(&heading);
        output.push('\n');
        output.push_str(&"=".repeat(heading.len()));
        output.push('\n');

        output.push_str("Version: ");
        output.push_str(package.version.as_deref().unwrap_or("<null>"));
        output.push('\n');

        if let Some(reference) = &package.source_reference {
            output.push_str("Source-Reference: ");
            output.push_str(reference);
            output.push('\n');
        }

        for dependency in &package.dependencies {
            output.push_str("-> ");
            output.push_str(&dependency.name);
            output.push('\n');
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for TextFormatter {
    fn format(&self, model: &GraphReadModel) -> Result<String> {
        let mut output = String::new();

        for package in &model.packages {
            if !output.is_empty() {
                output.push_str("\n\n");
            }
            Self::write_package(&mut output, package);
        }

        Ok(output)
    }
}
