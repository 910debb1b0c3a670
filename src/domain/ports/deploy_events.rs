//! Deploy Event Port
//!
//! Provides an observable interface for pack and distribute operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::services::DeployStep;
use crate::domain::value_objects::Host;

/// Event emitted while packing or distributing
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Packaging started
    PackStarted {
        content_dir: PathBuf,
        archive: PathBuf,
    },

    /// Marker file written into the content directory
    MarkerWritten { path: PathBuf },

    /// Archive written
    PackCompleted {
        archive: PathBuf,
        entries: usize,
        bytes: u64,
    },

    /// Packaging produced no archive
    PackFailed { error: String },

    /// Distribution refused before any host was contacted
    DistributeRefused { error: String },

    /// Distribution started
    DistributeStarted {
        archive: PathBuf,
        host_count: usize,
        transport: &'static str,
    },

    /// A host's step sequence started
    HostStarted {
        index: usize,
        host: Host,
        release: PathBuf,
    },

    /// One step is about to run on a host
    StepStarted { host: Host, step: DeployStep },

    /// One step finished on a host
    StepCompleted { host: Host, step: DeployStep },

    /// Every step succeeded and the host serves the new release
    HostCompleted { host: Host, release: PathBuf },

    /// A step failed; the host keeps whatever earlier steps changed
    HostFailed {
        host: Host,
        step: DeployStep,
        error: String,
    },

    /// Distribution finished
    Completed {
        succeeded: usize,
        failed: usize,
        skipped: usize,
    },
}

/// Trait for receiving deploy events
///
/// Implementations:
/// - `ConsoleEventSink`: progress lines in the terminal
/// - `JsonEventSink`: NDJSON event stream for CI
/// - `NoopEventSink`: silent operation
pub trait DeployEventSink {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants per-step events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
