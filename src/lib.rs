//! Webship - static site release packer and deployer
//!
//! Webship packs a content directory into a timestamped gzip tar, pushes it to
//! a list of hosts and switches each host's `current` pointer to the new
//! release.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod tasks;

// Re-exports for convenience
pub use config::{Config, Transport};
pub use domain::entities::Archive;
pub use domain::value_objects::Host;
pub use error::{DistributeError, PackError, WebshipError, WebshipResult};
pub use tasks::{deploy, do_deploy, do_pack};
