//! Configuration module for Webship
//!
//! Resolution order:
//! 1. `--config <FILE>` (highest priority, must exist)
//! 2. `./webship.toml`
//! 3. User config (`~/.config/webship/config.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! Environment variables (`WEBSHIP_*`) are applied on top of whichever file won.

mod loader;
mod types;

pub use loader::{resolve, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{Config, DeployConfig, PackConfig, RemoteConfig, SshConfig, Transport};
