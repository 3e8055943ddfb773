//! Generator configuration.
//!
//! Generation takes no parameters: the binary always writes to
//! [`DEFAULT_PACKS_DIR`]. A different directory is only used by tests and
//! the xtask freshness check.

use std::path::{Path, PathBuf};

use dhpacks_domain::CompendiumKind;

/// Packs directory, relative to the working directory.
pub const DEFAULT_PACKS_DIR: &str = "packs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    packs_dir: PathBuf,
}

impl GeneratorConfig {
    /// Write packs into `packs_dir` instead of the default.
    pub fn new(packs_dir: impl Into<PathBuf>) -> Self {
        Self {
            packs_dir: packs_dir.into(),
        }
    }

    pub fn packs_dir(&self) -> &Path {
        &self.packs_dir
    }

    /// Destination file for a kind's pack.
    pub fn pack_path(&self, kind: CompendiumKind) -> PathBuf {
        self.packs_dir.join(kind.pack_file())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PACKS_DIR)
    }
}
