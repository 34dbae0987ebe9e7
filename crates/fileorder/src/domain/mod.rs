pub mod collate;
pub mod entry;
pub mod manifest;
