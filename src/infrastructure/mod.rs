//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `archive` - gzip tar writer for the packager
//! - `clock` - wall clock
//! - `remote/` - transports (ssh, local)
//! - `events/` - event sinks (console, JSON)

pub mod archive;
pub mod clock;
pub mod events;
pub mod remote;

pub use archive::{write_tar_gz, ArchiveSummary};
pub use clock::SystemClock;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use remote::{executor_for, LocalExecutor, SshExecutor, SshOptions};
