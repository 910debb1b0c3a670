//! Remote Executor Port
//!
//! Abstracts the channel used to reach a host: run one shell command and wait
//! for it, or copy one local file to a remote path. Implementations:
//! - `SshExecutor` - OpenSSH `ssh` / `scp`
//! - `LocalExecutor` - `sh -c` and a file copy on this machine

use std::path::Path;
use thiserror::Error;

use crate::domain::value_objects::Host;

/// Output of a remote command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Transport or command failure
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The transport binary could not be started
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero
    #[error("exited with {}: {}", exit_code_display(.code), .stderr.trim())]
    Exit { code: Option<i32>, stderr: String },

    /// The upload did not complete
    #[error("upload failed: {0}")]
    Upload(String),
}

fn exit_code_display(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "signal".to_string(),
    }
}

/// Ordered, blocking command dispatch and file upload to a host
pub trait RemoteExecutor {
    /// Name of the transport (for logging)
    fn name(&self) -> &'static str;

    /// Run a shell command on `host` and wait for it to finish.
    fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, RemoteError>;

    /// Copy `local` to `remote` on `host`.
    fn upload(&self, host: &Host, local: &Path, remote: &Path) -> Result<(), RemoteError>;
}

impl<E: RemoteExecutor + ?Sized> RemoteExecutor for &E {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, RemoteError> {
        (**self).run(host, command)
    }

    fn upload(&self, host: &Host, local: &Path, remote: &Path) -> Result<(), RemoteError> {
        (**self).upload(host, local, remote)
    }
}

impl<E: RemoteExecutor + ?Sized> RemoteExecutor for Box<E> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, RemoteError> {
        (**self).run(host, command)
    }

    fn upload(&self, host: &Host, local: &Path, remote: &Path) -> Result<(), RemoteError> {
        (**self).upload(host, local, remote)
    }
}
