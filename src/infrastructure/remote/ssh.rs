//! SSH transport
//!
//! One `ssh` process per command and one `scp` process per upload. Runs in
//! batch mode so a missing key fails the step instead of waiting on a
//! password prompt.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::config::SshConfig;
use crate::domain::ports::{CommandOutput, RemoteError, RemoteExecutor};
use crate::domain::value_objects::Host;

/// Connection settings shared by every host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshOptions {
    /// Login used for hosts that do not name one
    pub user: Option<String>,
    pub port: Option<u16>,
    pub identity_file: Option<PathBuf>,
    pub connect_timeout_secs: Option<u64>,
}

impl From<&SshConfig> for SshOptions {
    fn from(config: &SshConfig) -> Self {
        Self {
            user: config.user.clone(),
            port: config.port,
            identity_file: config.identity_file.clone(),
            connect_timeout_secs: config.connect_timeout_secs,
        }
    }
}

/// RemoteExecutor over OpenSSH
pub struct SshExecutor {
    options: SshOptions,
}

impl SshExecutor {
    pub fn new(options: SshOptions) -> Self {
        Self { options }
    }

    /// Options common to ssh and scp. They only differ in the port flag.
    fn common_args(&self, port_flag: &str) -> Vec<String> {
        let mut args = vec!["-o".to_string(), "BatchMode=yes".to_string()];
        if let Some(secs) = self.options.connect_timeout_secs {
            args.push("-o".to_string());
            args.push(format!("ConnectTimeout={}", secs));
        }
        if let Some(port) = self.options.port {
            args.push(port_flag.to_string());
            args.push(port.to_string());
        }
        if let Some(identity) = &self.options.identity_file {
            args.push("-i".to_string());
            args.push(identity.display().to_string());
        }
        args
    }

    fn destination(&self, host: &Host) -> String {
        host.destination(self.options.user.as_deref())
    }

    fn ssh_command(&self, host: &Host, command: &str) -> Command {
        let mut cmd = Command::new("ssh");
        cmd.args(self.common_args("-p"))
            .arg(self.destination(host))
            .arg(command)
            .stdin(Stdio::null());
        cmd
    }

    fn scp_command(&self, host: &Host, local: &Path, remote: &Path) -> Command {
        let mut cmd = Command::new("scp");
        cmd.args(self.common_args("-P"))
            .arg(local)
            .arg(format!("{}:{}", self.destination(host), remote.display()))
            .stdin(Stdio::null());
        cmd
    }
}

fn spawn_output(mut cmd: Command, program: &str) -> Result<Output, RemoteError> {
    cmd.output().map_err(|source| RemoteError::Spawn {
        program: program.to_string(),
        source,
    })
}

impl RemoteExecutor for SshExecutor {
    fn name(&self) -> &'static str {
        "ssh"
    }

    fn run(&self, host: &Host, command: &str) -> Result<CommandOutput, RemoteError> {
        debug!(host = %host, command, "ssh");
        let output = spawn_output(self.ssh_command(host, command), "ssh")?;
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            debug!(host = %host, code = ?output.status.code(), stderr = %stderr.trim(), "ssh command failed");
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
        debug!(host = %host, local = %local.display(), remote = %remote.display(), "scp");
        let output = spawn_output(self.scp_command(host, local, remote), "scp")?;

        if !output.status.success() {
            return Err(RemoteError::Upload(format!(
                "scp exited with {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(())
    }
}
