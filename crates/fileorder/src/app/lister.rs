use std::path::Path;
use std::sync::Arc;

use crate::domain::collate::compare_display_names;
use crate::domain::entry::DirEntry;
use crate::domain::manifest::OrderManifest;
use crate::infra::dir_scan::scan_dir;
use crate::infra::store::OrderStore;

/// Produces the authoritative child ordering for a directory and
/// computes the manifest update resulting from a drop.
pub struct DirectoryLister {
    store: Arc<dyn OrderStore>,
}

impl DirectoryLister {
    /// Creates a lister over the given manifest store.
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Lists the children of `dir` in display order.
    ///
    /// Children named by the directory's manifest come first, in
    /// manifest order; the rest follow, sorted by display name.
    /// Directories and files are never segregated by type — only
    /// manifest membership and name decide position. Manifest names
    /// with no matching child are skipped, and a directory that cannot
    /// be enumerated lists as empty.
    pub fn list(&self, dir: &Path) -> Vec<DirEntry> {
        let manifest = self.store.read(dir);

        let mut ordered = Vec::new();
        let mut unordered = Vec::new();
        for entry in scan_dir(dir) {
            match manifest.rank_of(entry.name()) {
                Some(rank) => ordered.push((rank, entry)),
                None => unordered.push(entry),
            }
        }

        ordered.sort_by_key(|(rank, _)| *rank);
        unordered.sort_by(|first, second| compare_display_names(first.name(), second.name()));

        ordered
            .into_iter()
            .map(|(_, entry)| entry)
            .chain(unordered)
            .collect()
    }

    /// Computes the manifest resulting from dropping `dragged_names`
    /// onto `dir`: each dragged name moves (or is appended) to the end
    /// of the directory's current manifest, in drag order.
    ///
    /// Pure compute over the stored state — persisting the result and
    /// refreshing the host's view stay with the caller.
    pub fn reorder(&self, dir: &Path, dragged_names: &[String]) -> OrderManifest {
        self.store.read(dir).apply_drop(dragged_names)
    }
}
