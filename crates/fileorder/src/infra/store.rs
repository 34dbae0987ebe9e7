//! Durable and in-memory key-value stores mapping a directory path to
//! its order manifest.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::manifest::OrderManifest;

/// Reserved sidecar file name holding a directory's display order.
pub const ORDER_FILE_NAME: &str = ".fileorder";

/// Error raised when persisting an order manifest fails.
///
/// Only `write` produces this error; read failures degrade to the
/// empty manifest instead. The host is expected to surface it as a
/// visible but non-fatal notification — the in-memory order change is
/// lost and the core does not retry.
#[derive(Debug, thiserror::Error)]
#[error("failed to persist order for {}: {source}", .dir.display())]
pub struct PersistError {
    /// Directory whose manifest could not be written.
    pub dir: PathBuf,
    /// Underlying filesystem error.
    #[source]
    pub source: io::Error,
}

/// Key-value store mapping a directory path to its order manifest.
///
/// Production uses [`FsOrderStore`]; tests and hosts that want
/// session-only ordering can inject [`MemoryOrderStore`] or a
/// `MockOrderStore`.
#[cfg_attr(test, mockall::automock)]
pub trait OrderStore: Send + Sync {
    /// Returns the manifest stored for `dir`.
    ///
    /// A directory with no stored manifest reads as the empty
    /// manifest; read failures are never surfaced.
    fn read(&self, dir: &Path) -> OrderManifest;

    /// Overwrites the manifest stored for `dir`.
    ///
    /// The full serialized sequence replaces whatever was stored
    /// before; manifests are never patched in place.
    ///
    /// # Errors
    /// Returns [`PersistError`] when the manifest cannot be written
    /// (permission denied, disk full, directory removed concurrently).
    fn write(&self, dir: &Path, manifest: &OrderManifest) -> Result<(), PersistError>;
}

/// [`OrderStore`] backed by a UTF-8 sidecar text file inside each
/// directory, one name per line.
pub struct FsOrderStore {
    file_name: String,
}

impl FsOrderStore {
    /// Creates a store using the default [`ORDER_FILE_NAME`] sidecar.
    pub fn new() -> Self {
        Self {
            file_name: ORDER_FILE_NAME.to_string(),
        }
    }

    /// Overrides the sidecar file name, for hosts that reserve a
    /// different name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    fn sidecar_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

impl Default for FsOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore for FsOrderStore {
    fn read(&self, dir: &Path) -> OrderManifest {
        let path = self.sidecar_path(dir);

        match fs::read_to_string(&path) {
            Ok(content) => OrderManifest::parse(&content),
            Err(error) => {
                // Missing sidecar is the normal case; anything else
                // (permissions, non-UTF-8 content) degrades to "no
                // stored order".
                if error.kind() != io::ErrorKind::NotFound {
                    tracing::debug!("unreadable order file {}: {error}", path.display());
                }
                OrderManifest::new()
            }
        }
    }

    fn write(&self, dir: &Path, manifest: &OrderManifest) -> Result<(), PersistError> {
        fs::write(self.sidecar_path(dir), manifest.serialize()).map_err(|source| PersistError {
            dir: dir.to_path_buf(),
            source,
        })
    }
}

/// In-memory [`OrderStore`] keyed by directory path.
///
/// Backs unit tests and makes the unprotected read-modify-write window
/// of a reorder observable without touching a real filesystem.
#[derive(Default)]
pub struct MemoryOrderStore {
    manifests: Mutex<HashMap<PathBuf, OrderManifest>>,
}

impl MemoryOrderStore {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for MemoryOrderStore {
    fn read(&self, dir: &Path) -> OrderManifest {
        self.manifests
            .lock()
            .map(|manifests| manifests.get(dir).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn write(&self, dir: &Path, manifest: &OrderManifest) -> Result<(), PersistError> {
        if let Ok(mut manifests) = self.manifests.lock() {
            manifests.insert(dir.to_path_buf(), manifest.clone());
        }

        Ok(())
    }
}
