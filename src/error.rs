//! Error types for Webship
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::RemoteError;
use crate::domain::services::DeployStep;
use crate::domain::value_objects::Host;

/// Result type alias for Webship operations
pub type WebshipResult<T> = Result<T, WebshipError>;

/// Errors raised while loading configuration or touching the local machine
#[derive(Error, Debug)]
pub enum WebshipError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Config file passed explicitly does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// A config value is present but unusable
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why the packager produced no archive
#[derive(Error, Debug)]
pub enum PackError {
    #[error("content directory not found: {path}")]
    ContentMissing { path: PathBuf },

    #[error("cannot create versions directory {path}: {source}")]
    VersionsDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write marker file {path}: {source}")]
    Marker {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write archive {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("archive already exists: {path}")]
    ArchiveExists { path: PathBuf },
}

/// Why a distribution could not start or did not finish
#[derive(Error, Debug)]
pub enum DistributeError {
    #[error("archive not found: {path}")]
    ArchiveMissing { path: PathBuf },

    #[error("archive name '{name}' has no usable base name")]
    InvalidArchiveName { name: String },

    #[error("no hosts configured")]
    NoHosts,

    #[error("{host}: step '{step}' failed: {source}")]
    Step {
        host: Host,
        step: DeployStep,
        #[source]
        source: RemoteError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_archive_missing() {
        let err = DistributeError::ArchiveMissing {
            path: PathBuf::from("versions/web_static_1.tgz"),
        };
        assert_eq!(err.to_string(), "archive not found: versions/web_static_1.tgz");
    }

    #[test]
    fn test_error_display_step_names_host_and_step() {
        let err = DistributeError::Step {
            host: Host::parse("10.0.0.2").unwrap(),
            step: DeployStep::Flatten,
            source: RemoteError::Exit {
                code: Some(1),
                stderr: "mv: cannot move".to_string(),
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("10.0.0.2: step 'flatten' failed"), "{msg}");
    }

    #[test]
    fn test_pack_error_keeps_source() {
        use std::error::Error as _;

        let err = PackError::VersionsDir {
            path: PathBuf::from("versions"),
            source: std::io::Error::new(std::io::ErrorKind::AlreadyExists, "file in the way"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("versions"));
    }
}
