//! Pack Options

use std::path::PathBuf;

use crate::config::Config;

/// Options for the pack use case
#[derive(Debug, Clone)]
pub struct PackOptions {
    /// Directory whose contents end up in the archive
    pub content_dir: PathBuf,
    /// Local output directory, created on demand
    pub versions_dir: PathBuf,
    /// Archive name prefix
    pub prefix: String,
    /// Single top-level directory name inside the archive
    pub wrapper: String,
    /// Marker written into `content_dir` before archiving
    pub marker_file: String,
    pub marker_content: String,
}

impl PackOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            content_dir: config.pack.content_dir.clone(),
            versions_dir: config.pack.versions_dir.clone(),
            prefix: config.archive_prefix(),
            wrapper: config.wrapper_name(),
            marker_file: config.pack.marker_file.clone(),
            marker_content: config.pack.marker_content.clone(),
        }
    }
}
