use std::path::Path;

use crate::domain::entry::DirEntry;

/// Lists the immediate children of `dir`, in no particular order.
///
/// Enumeration is best-effort: a missing, unreadable, or non-directory
/// path yields the empty list so a broken subtree never breaks the
/// host's rendering path. Children whose type cannot be determined are
/// treated as files. The order sidecar file is listed like any other
/// child; callers decide what to show.
pub fn scan_dir(dir: &Path) -> Vec<DirEntry> {
    let reader = match std::fs::read_dir(dir) {
        Ok(reader) => reader,
        Err(error) => {
            tracing::debug!("cannot list {}: {error}", dir.display());
            return Vec::new();
        }
    };

    reader
        .filter_map(Result::ok)
        .map(|child| {
            let name = child.file_name().to_string_lossy().into_owned();
            let path = child.path();

            if child.file_type().is_ok_and(|file_type| file_type.is_dir()) {
                DirEntry::Directory { name, path }
            } else {
                DirEntry::File { name, path }
            }
        })
        .collect()
}
