//! Errors raised while writing compendium packs.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure writing a pack file. Every variant names the destination.
#[derive(Debug, Error)]
pub enum PackError {
    /// The destination could not be created, written or flushed.
    #[error("failed to write pack {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded as JSON.
    #[error("failed to encode record for pack {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl PackError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn encode(path: &Path, source: serde_json::Error) -> Self {
        Self::Encode {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The pack file the failure concerns.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Encode { path, .. } => path,
        }
    }
}
