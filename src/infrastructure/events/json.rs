//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let command = self.command;
        let json = match event {
            DeployEvent::PackStarted {
                content_dir,
                archive,
            } => {
                serde_json::json!({
                    "event": "pack_start",
                    "command": command,
                    "content_dir": content_dir.display().to_string(),
                    "archive": archive.display().to_string(),
                })
            }

            DeployEvent::MarkerWritten { path } => {
                serde_json::json!({
                    "event": "marker_written",
                    "command": command,
                    "path": path.display().to_string(),
                })
            }

            DeployEvent::PackCompleted {
                archive,
                entries,
                bytes,
            } => {
                serde_json::json!({
                    "event": "pack_complete",
                    "command": command,
                    "archive": archive.display().to_string(),
                    "entries": entries,
                    "bytes": bytes,
                })
            }

            DeployEvent::PackFailed { error } => {
                serde_json::json!({
                    "event": "pack_failed",
                    "command": command,
                    "error": error,
                })
            }

            DeployEvent::DistributeRefused { error } => {
                serde_json::json!({
                    "event": "error",
                    "command": command,
                    "error": error,
                })
            }

            DeployEvent::DistributeStarted {
                archive,
                host_count,
                transport,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": command,
                    "archive": archive.display().to_string(),
                    "hosts": host_count,
                    "transport": transport,
                })
            }

            DeployEvent::HostStarted {
                index,
                host,
                release,
            } => {
                serde_json::json!({
                    "event": "host_start",
                    "command": command,
                    "index": index,
                    "host": host.to_string(),
                    "release": release.display().to_string(),
                })
            }

            DeployEvent::StepStarted { host, step } => {
                serde_json::json!({
                    "event": "step_start",
                    "command": command,
                    "host": host.to_string(),
                    "step": step.label(),
                })
            }

            DeployEvent::StepCompleted { host, step } => {
                serde_json::json!({
                    "event": "step_complete",
                    "command": command,
                    "host": host.to_string(),
                    "step": step.label(),
                })
            }

            DeployEvent::HostCompleted { host, release } => {
                serde_json::json!({
                    "event": "host_complete",
                    "command": command,
                    "host": host.to_string(),
                    "release": release.display().to_string(),
                })
            }

            DeployEvent::HostFailed { host, step, error } => {
                serde_json::json!({
                    "event": "host_failed",
                    "command": command,
                    "host": host.to_string(),
                    "step": step.label(),
                    "error": error,
                })
            }

            DeployEvent::Completed {
                succeeded,
                failed,
                skipped,
            } => {
                let status = if failed == 0 && skipped == 0 {
                    "success"
                } else {
                    "failed"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": command,
                    "status": status,
                    "succeeded": succeeded,
                    "failed": failed,
                    "skipped": skipped,
                })
            }
        };

        self.write_event(json);
    }
}
