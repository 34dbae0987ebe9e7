use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app::lister::DirectoryLister;
use crate::domain::entry::DirEntry;
use crate::infra::store::{OrderStore, PersistError};

/// Callback seam through which the core tells the host that a
/// directory's subtree changed and must be re-fetched.
///
/// Production wires this to the host tree-view's refresh mechanism;
/// tests inject a `MockRefreshNotifier`.
#[cfg_attr(test, mockall::automock)]
pub trait RefreshNotifier: Send + Sync {
    /// Signals that the children of `dir` must be re-listed and
    /// re-rendered.
    fn subtree_changed(&self, dir: &Path);
}

/// Entry point consumed by a host tree-view surface.
///
/// Wraps the pure listing/merge core with the two side effects the
/// host contract requires: persisting the updated manifest after a
/// drop, then notifying the host to re-fetch the affected subtree.
pub struct Explorer {
    lister: DirectoryLister,
    notifier: Arc<dyn RefreshNotifier>,
    roots: Vec<PathBuf>,
    store: Arc<dyn OrderStore>,
}

impl Explorer {
    /// Creates an explorer seeded with the host's workspace roots.
    ///
    /// The first root seeds the top-level listing; with no roots the
    /// top level lists nothing.
    pub fn new(
        roots: Vec<PathBuf>,
        store: Arc<dyn OrderStore>,
        notifier: Arc<dyn RefreshNotifier>,
    ) -> Self {
        Self {
            lister: DirectoryLister::new(Arc::clone(&store)),
            notifier,
            roots,
            store,
        }
    }

    /// Returns the ordered children of `node`, or of the first
    /// workspace root when `node` is `None`. File nodes have no
    /// children.
    pub fn children(&self, node: Option<&DirEntry>) -> Vec<DirEntry> {
        match node {
            None => match self.roots.first() {
                Some(root) => self.lister.list(root),
                None => Vec::new(),
            },
            Some(entry) if entry.is_dir() => self.lister.list(entry.path()),
            Some(_) => Vec::new(),
        }
    }

    /// Handles a drop of the `dropped` paths onto `target`.
    ///
    /// A missing target or an empty payload is a no-op. Dropping onto
    /// a directory reorders within that directory; dropping onto a
    /// file reorders within the file's parent directory. The dragged
    /// entries move to the end of the target directory's manifest in
    /// payload order, the manifest is persisted, and the host is told
    /// to re-fetch the directory. Only the target directory's manifest
    /// is touched: a cross-directory drag neither cleans the source
    /// directory's manifest nor moves anything on disk.
    ///
    /// # Errors
    /// Returns [`PersistError`] when the updated manifest cannot be
    /// written; the order change is lost and no refresh is signalled.
    pub fn handle_drop(
        &self,
        target: Option<&DirEntry>,
        dropped: &[PathBuf],
    ) -> Result<(), PersistError> {
        let Some(target) = target else {
            tracing::debug!("drop without a target ignored");
            return Ok(());
        };

        let dragged_names: Vec<String> = dropped
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        if dragged_names.is_empty() {
            tracing::debug!("drop with an empty payload ignored");
            return Ok(());
        }

        let dir = drop_directory(target);
        let manifest = self.lister.reorder(dir, &dragged_names);
        self.store.write(dir, &manifest)?;
        self.notifier.subtree_changed(dir);

        Ok(())
    }
}

/// Resolves the directory whose manifest a drop on `target` updates.
fn drop_directory(target: &DirEntry) -> &Path {
    match target {
        DirEntry::Directory { path, .. } => path,
        DirEntry::File { path, .. } => path.parent().unwrap_or(path),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io;

    use tempfile::TempDir;

    use crate::domain::manifest::OrderManifest;
    use crate::infra::store::{FsOrderStore, MemoryOrderStore, MockOrderStore};

    use super::*;

    fn dir_entry(path: &Path) -> DirEntry {
        DirEntry::Directory {
            name: path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            path: path.to_path_buf(),
        }
    }

    fn silent_notifier() -> Arc<MockRefreshNotifier> {
        let mut notifier = MockRefreshNotifier::new();
        notifier.expect_subtree_changed().never();
        Arc::new(notifier)
    }

    #[test]
    fn test_children_of_root_lists_first_workspace_root() {
        // Arrange
        let temp_dir = TempDir::new().expect("test expectation should hold");
        fs::write(temp_dir.path().join("a.txt"), "").expect("test expectation should hold");
        let explorer = Explorer::new(
            vec![temp_dir.path().to_path_buf()],
            Arc::new(MemoryOrderStore::new()),
            silent_notifier(),
        );

        // Act
        let children = explorer.children(None);

        // Assert
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name(), "a.txt");
    }

    #[test]
    fn test_children_without_workspace_roots_is_empty() {
        // Arrange
        let explorer = Explorer::new(
            Vec::new(),
            Arc::new(MemoryOrderStore::new()),
            silent_notifier(),
        );

        // Act
        let children = explorer.children(None);

        // Assert
        assert!(children.is_empty());
    }

    #[test]
    fn test_children_of_file_node_is_empty() {
        // Arrange
        let explorer = Explorer::new(
            Vec::new(),
            Arc::new(MemoryOrderStore::new()),
            silent_notifier(),
        );
        let file = DirEntry::File {
            name: "a.txt".to_string(),
            path: PathBuf::from("/proj/a.txt"),
        };

        // Act
        let children = explorer.children(Some(&file));

        // Assert
        assert!(children.is_empty());
    }

    #[test]
    fn test_handle_drop_without_target_is_a_no_op() {
        // Arrange — a store with no expectations fails on any call
        let explorer = Explorer::new(
            Vec::new(),
            Arc::new(MockOrderStore::new()),
            silent_notifier(),
        );

        // Act
        let result = explorer.handle_drop(None, &[PathBuf::from("/proj/a.txt")]);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_drop_with_empty_payload_is_a_no_op() {
        // Arrange
        let explorer = Explorer::new(
            Vec::new(),
            Arc::new(MockOrderStore::new()),
            silent_notifier(),
        );
        let target = dir_entry(Path::new("/proj"));

        // Act
        let result = explorer.handle_drop(Some(&target), &[]);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_drop_onto_directory_appends_and_notifies() {
        // Arrange — Scenario D wired through store and notifier
        let mut store = MockOrderStore::new();
        store
            .expect_read()
            .withf(|dir| dir == Path::new("/proj"))
            .times(1)
            .returning(|_| OrderManifest::from_names(["a.txt", "b.txt", "c.txt"]));
        store
            .expect_write()
            .withf(|dir, manifest| {
                dir == Path::new("/proj") && manifest.names() == ["a.txt", "c.txt", "b.txt"]
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mut notifier = MockRefreshNotifier::new();
        notifier
            .expect_subtree_changed()
            .withf(|dir| dir == Path::new("/proj"))
            .times(1)
            .return_const(());
        let explorer = Explorer::new(Vec::new(), Arc::new(store), Arc::new(notifier));
        let target = dir_entry(Path::new("/proj"));

        // Act
        let result = explorer.handle_drop(Some(&target), &[PathBuf::from("/proj/b.txt")]);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_drop_onto_file_targets_its_parent_directory() {
        // Arrange
        let mut store = MockOrderStore::new();
        store
            .expect_read()
            .withf(|dir| dir == Path::new("/proj"))
            .times(1)
            .returning(|_| OrderManifest::new());
        store
            .expect_write()
            .withf(|dir, manifest| {
                dir == Path::new("/proj") && manifest.names() == ["x.txt", "y.txt"]
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let mut notifier = MockRefreshNotifier::new();
        notifier
            .expect_subtree_changed()
            .withf(|dir| dir == Path::new("/proj"))
            .times(1)
            .return_const(());
        let explorer = Explorer::new(Vec::new(), Arc::new(store), Arc::new(notifier));
        let target = DirEntry::File {
            name: "c.txt".to_string(),
            path: PathBuf::from("/proj/c.txt"),
        };

        // Act — Scenario E, dropped onto a file instead of its parent
        let result = explorer.handle_drop(
            Some(&target),
            &[PathBuf::from("/other/x.txt"), PathBuf::from("/other/y.txt")],
        );

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn test_handle_drop_write_failure_propagates_without_refresh() {
        // Arrange
        let mut store = MockOrderStore::new();
        store
            .expect_read()
            .times(1)
            .returning(|_| OrderManifest::new());
        store.expect_write().times(1).returning(|dir, _| {
            Err(PersistError {
                dir: dir.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            })
        });
        let explorer = Explorer::new(Vec::new(), Arc::new(store), silent_notifier());
        let target = dir_entry(Path::new("/proj"));

        // Act
        let result = explorer.handle_drop(Some(&target), &[PathBuf::from("/proj/a.txt")]);

        // Assert
        let error = result.expect_err("test expectation should hold");
        assert_eq!(error.dir, Path::new("/proj"));
    }

    #[test]
    fn test_drop_then_relist_shows_the_new_order() {
        // Arrange — full flow over a real directory and sidecar file
        let temp_dir = TempDir::new().expect("test expectation should hold");
        for name in ["a.txt", "b.txt", "c.txt"] {
            fs::write(temp_dir.path().join(name), "").expect("test expectation should hold");
        }
        let mut notifier = MockRefreshNotifier::new();
        notifier.expect_subtree_changed().times(1).return_const(());
        let explorer = Explorer::new(
            vec![temp_dir.path().to_path_buf()],
            Arc::new(FsOrderStore::new()),
            Arc::new(notifier),
        );
        let target = dir_entry(temp_dir.path());

        // Act
        explorer
            .handle_drop(Some(&target), &[temp_dir.path().join("b.txt")])
            .expect("test expectation should hold");
        let children = explorer.children(None);

        // Assert — the dropped entry leads; the sidecar file itself is
        // listed among the unordered rest
        let names: Vec<&str> = children.iter().map(DirEntry::name).collect();
        assert_eq!(names, ["b.txt", ".fileorder", "a.txt", "c.txt"]);
    }

    #[test]
    fn test_handle_drop_persists_through_a_real_store() {
        // Arrange — cross-directory drag only updates the target's
        // manifest; nothing moves on disk
        let store = Arc::new(MemoryOrderStore::new());
        let mut notifier = MockRefreshNotifier::new();
        notifier.expect_subtree_changed().times(1).return_const(());
        let explorer = Explorer::new(
            Vec::new(),
            Arc::clone(&store) as Arc<dyn OrderStore>,
            Arc::new(notifier),
        );
        let target = dir_entry(Path::new("/proj"));

        // Act
        explorer
            .handle_drop(Some(&target), &[PathBuf::from("/elsewhere/z.txt")])
            .expect("test expectation should hold");

        // Assert
        assert_eq!(store.read(Path::new("/proj")).names(), ["z.txt"]);
        assert!(store.read(Path::new("/elsewhere")).is_empty());
    }
}
