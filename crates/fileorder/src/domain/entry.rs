use std::path::{Path, PathBuf};

/// One immediate child of a listed directory.
///
/// Entries are transient values produced per listing call; the core
/// never caches them or holds them across calls.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DirEntry {
    /// A subdirectory of the listed directory.
    Directory {
        /// Base name, unique within the parent directory.
        name: String,
        /// Absolute path of the subdirectory.
        path: PathBuf,
    },
    /// A regular (non-directory) child.
    File {
        /// Base name, unique within the parent directory.
        name: String,
        /// Absolute path of the file.
        path: PathBuf,
    },
}

impl DirEntry {
    /// Returns the base name of the entry.
    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name,
        }
    }

    /// Returns the absolute path of the entry.
    pub fn path(&self) -> &Path {
        match self {
            Self::Directory { path, .. } | Self::File { path, .. } => path,
        }
    }

    /// Returns `true` for the directory variant.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }
}
