//! Host-facing composition: the ordered listing service and the
//! drag-and-drop surface a tree-view host consumes.

mod explorer;
mod lister;

pub use explorer::{Explorer, RefreshNotifier};
pub use lister::DirectoryLister;
