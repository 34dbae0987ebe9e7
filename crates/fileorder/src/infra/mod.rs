/// Best-effort enumeration of a directory's immediate children.
pub mod dir_scan;
/// Per-directory persistence of order manifests.
pub mod store;
