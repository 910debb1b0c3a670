//! Remote transports
//!
//! Implements the RemoteExecutor port:
//! - `SshExecutor` drives the OpenSSH `ssh` and `scp` binaries
//! - `LocalExecutor` runs the same commands with `sh -c` on this machine

mod local;
mod ssh;

pub use local::LocalExecutor;
pub use ssh::{SshExecutor, SshOptions};

use crate::config::{Config, Transport};
use crate::domain::ports::RemoteExecutor;

/// Build the transport selected in the config
pub fn executor_for(config: &Config) -> Box<dyn RemoteExecutor> {
    match config.deploy.transport {
        Transport::Ssh => Box::new(SshExecutor::new(SshOptions::from(&config.ssh))),
        Transport::Local => Box::new(LocalExecutor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_selects_transport() {
        let mut config = Config::default();
        assert_eq!(executor_for(&config).name(), "ssh");

        config.deploy.transport = Transport::Local;
        assert_eq!(executor_for(&config).name(), "local");
    }
}
