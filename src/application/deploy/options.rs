//! Distribute Options

use crate::config::Config;
use crate::domain::value_objects::{Host, RemoteLayout};

/// Options for the distribute use case
#[derive(Debug, Clone)]
pub struct DistributeOptions {
    /// Hosts in visiting order
    pub hosts: Vec<Host>,
    /// Where releases, uploads and the current pointer live on each host
    pub layout: RemoteLayout,
    /// Top-level directory inside the archive, flattened away after extraction
    pub wrapper: String,
    /// Skip the remaining hosts after the first failure
    pub fail_fast: bool,
}

impl DistributeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            hosts: config.deploy.hosts.clone(),
            layout: config.layout(),
            wrapper: config.wrapper_name(),
            fail_fast: config.deploy.fail_fast,
        }
    }
}
