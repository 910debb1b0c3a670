//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Host, RemoteLayout};
use crate::error::{WebshipError, WebshipResult};

use super::loader::{self, ConfigWarning};

/// Packaging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    #[serde(default = "default_versions_dir")]
    pub versions_dir: PathBuf,

    /// Archive name prefix, defaults to the content directory's name
    #[serde(default)]
    pub archive_prefix: Option<String>,

    #[serde(default = "default_marker_file")]
    pub marker_file: String,

    #[serde(default = "default_marker_content")]
    pub marker_content: String,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            versions_dir: default_versions_dir(),
            archive_prefix: None,
            marker_file: default_marker_file(),
            marker_content: default_marker_content(),
        }
    }
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("web_static")
}

fn default_versions_dir() -> PathBuf {
    PathBuf::from("versions")
}

fn default_marker_file() -> String {
    "my_index.html".to_string()
}

fn default_marker_content() -> String {
    "New version deployed!\n".to_string()
}

/// Remote layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_releases_dir")]
    pub releases_dir: PathBuf,

    #[serde(default = "default_current_link")]
    pub current_link: PathBuf,

    #[serde(default = "default_upload_dir")]
    pub upload_dir: PathBuf,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            releases_dir: default_releases_dir(),
            current_link: default_current_link(),
            upload_dir: default_upload_dir(),
        }
    }
}

fn default_releases_dir() -> PathBuf {
    RemoteLayout::default().releases_dir
}

fn default_current_link() -> PathBuf {
    RemoteLayout::default().current_link
}

fn default_upload_dir() -> PathBuf {
    RemoteLayout::default().upload_dir
}

/// How commands reach a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Ssh,
    Local,
}

impl std::str::FromStr for Transport {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ssh" => Ok(Transport::Ssh),
            "local" => Ok(Transport::Local),
            other => Err(format!("unknown transport '{}' (expected ssh or local)", other)),
        }
    }
}

/// Deploy configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeployConfig {
    #[serde(default)]
    pub hosts: Vec<Host>,

    #[serde(default)]
    pub transport: Transport,

    /// Stop after the first failed host instead of trying the rest
    #[serde(default)]
    pub fail_fast: bool,
}

/// SSH connection settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SshConfig {
    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub identity_file: Option<PathBuf>,

    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pack: PackConfig,

    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub ssh: SshConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> WebshipResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> WebshipResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (WEBSHIP_* prefix)
    pub fn with_env_overrides(self) -> WebshipResult<Self> {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    pub fn layout(&self) -> RemoteLayout {
        RemoteLayout {
            releases_dir: self.remote.releases_dir.clone(),
            current_link: self.remote.current_link.clone(),
            upload_dir: self.remote.upload_dir.clone(),
        }
    }

    /// Name of the single top-level directory inside every archive
    pub fn wrapper_name(&self) -> String {
        let dir = &self.pack.content_dir;
        let name = match dir.file_name() {
            Some(name) => Some(name.to_os_string()),
            None => std::fs::canonicalize(dir)
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_os_string())),
        };
        name.map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "web_static".to_string())
    }

    /// Archive name prefix. When derived from the content directory, a `.`
    /// in the directory name becomes `_` (`example.com` -> `example_com`).
    pub fn archive_prefix(&self) -> String {
        match &self.pack.archive_prefix {
            Some(prefix) => prefix.clone(),
            None => self.wrapper_name().replace('.', "_"),
        }
    }

    /// Reject values that would produce ambiguous archive or release names.
    pub fn validate(&self) -> WebshipResult<()> {
        if let Some(prefix) = &self.pack.archive_prefix {
            let message = if prefix.is_empty() {
                Some("must not be empty")
            } else if prefix.contains('.') {
                Some("must not contain '.', the release name stops at the first one")
            } else if prefix.contains('/') {
                Some("must not contain '/'")
            } else {
                None
            };
            if let Some(message) = message {
                return Err(WebshipError::InvalidValue {
                    key: "pack.archive_prefix".to_string(),
                    message: format!("'{}' {}", prefix, message),
                });
            }
        }
        Ok(())
    }
}
