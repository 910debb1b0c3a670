//! Domain Layer
//!
//! Release bookkeeping without I/O: what an archive is called, where a release
//! lives on a host, and which step of a host deployment comes next.
//!
//! ## Structure
//!
//! - `entities/` - Archives produced by the packager
//! - `value_objects/` - Hosts, remote layout, timestamp labels
//! - `services/` - The per-host step machine and its command plan
//! - `ports/` - Interface definitions for infrastructure (transport, clock, events)

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
