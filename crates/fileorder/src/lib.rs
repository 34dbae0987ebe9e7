//! Persistent, per-directory display ordering for file-browser trees.
//!
//! A host tree-view asks [`Explorer`] for the children of a node and
//! forwards drag-and-drop drops to it. Order is stored per directory
//! in a sidecar manifest file ([`ORDER_FILE_NAME`]), merged with the
//! live directory listing on every request: manifest-ranked entries
//! first, everything else sorted by display name.

pub mod app;
pub mod domain;
pub mod infra;

// Re-exports for convenience
pub use app::{DirectoryLister, Explorer, RefreshNotifier};
pub use domain::entry::DirEntry;
pub use domain::manifest::OrderManifest;
pub use infra::store::{
    FsOrderStore, MemoryOrderStore, ORDER_FILE_NAME, OrderStore, PersistError,
};
