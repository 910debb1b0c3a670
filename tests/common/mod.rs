//! Common test utilities for Webship CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project + home directories and a local-transport config
//! - Fixtures: Reusable site content and config templates

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
