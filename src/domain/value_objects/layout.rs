//! Remote directory layout shared by every host

use std::path::{Path, PathBuf};

/// Where releases, the current pointer and uploads live on a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteLayout {
    pub releases_dir: PathBuf,
    pub current_link: PathBuf,
    pub upload_dir: PathBuf,
}

impl Default for RemoteLayout {
    fn default() -> Self {
        Self {
            releases_dir: PathBuf::from("/data/web_static/releases"),
            current_link: PathBuf::from("/data/web_static/current"),
            upload_dir: PathBuf::from("/tmp"),
        }
    }
}

impl RemoteLayout {
    /// Release directory for an archive base name
    pub fn release_dir(&self, base_name: &str) -> PathBuf {
        self.releases_dir.join(base_name)
    }

    /// Upload location for an archive file name
    pub fn upload_path(&self, file_name: &str) -> PathBuf {
        self.upload_dir.join(file_name)
    }

    /// Name the new pointer is created under before it is renamed over
    /// `current_link`.
    pub fn staged_link(&self) -> PathBuf {
        let mut staged = self.current_link.clone().into_os_string();
        staged.push(".staged");
        PathBuf::from(staged)
    }

    pub fn current_link(&self) -> &Path {
        &self.current_link
    }
}
