/// Process adapters running external tools
mod composer_installer;

pub use composer_installer::{ComposerInstaller, DEFAULT_COMPOSER_BINARY};
