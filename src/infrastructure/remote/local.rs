//! Local transport
//!
//! Treats every host as this machine: commands go through `sh -c`, uploads
//! are plain copies. Useful for a staging box that serves its own releases.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::domain::ports::{CommandOutput, RemoteError, RemoteExecutor};
use crate::domain::value_objects::Host;

/// RemoteExecutor for the local machine
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalExecutor;

impl RemoteExecutor for LocalExecutor {
    fn name(&self) -> &'static str {
        "local"
    }

    fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, RemoteError> {
        debug!(host = %host, command, "sh -c");
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| RemoteError::Spawn {
                program: "sh".to_string(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        if !output.status.success() {
            return Err(RemoteError::Exit {
                code: output.status.code(),
                stderr,
            });
        }

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr,
        })
    }

    fn upload(&self, host: &Host, local: &Path, remote: &Path) -> Result<(), RemoteError> {
        debug!(host = %host, local = %local.display(), remote = %remote.display(), "copy");
        fs::copy(local, remote)
            .map(|_| ())
            .map_err(|e| RemoteError::Upload(format!("{} -> {}: {}", local.display(), remote.display(), e)))
    }
}
