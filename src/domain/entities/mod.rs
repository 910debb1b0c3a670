//! Domain Entities
//!
//! - `Archive` - A packaged snapshot of the content directory

mod archive;

pub use archive::{Archive, ArchiveNameError, ARCHIVE_EXTENSION};
