//! Console Event Sink
//!
//! Human-readable progress lines. Per-step lines only show up with `-v`.

use crossterm::style::Stylize;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

const SUCCESS: &str = "✓";
const ERROR: &str = "✗";
const PROGRESS: &str = "●";
const ARROW: &str = "↳";

/// Event sink that prints progress for people
pub struct ConsoleEventSink {
    color: bool,
    verbose: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(color: bool, verbose: bool) -> Self {
        Self::with_writer(color, verbose, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(color: bool, verbose: bool, writer: W) -> Self {
        Self {
            color,
            verbose,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn icon(&self, icon: &'static str) -> String {
        if !self.color {
            return icon.to_string();
        }
        match icon {
            SUCCESS => icon.green().to_string(),
            ERROR => icon.red().to_string(),
            PROGRESS => icon.cyan().to_string(),
            _ => icon.dark_grey().to_string(),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::PackStarted {
                content_dir,
                archive,
            } => self.line(format!(
                "{} Packing {} into {}",
                self.icon(PROGRESS),
                content_dir.display(),
                archive.display()
            )),
            DeployEvent::MarkerWritten { path } => {
                if self.verbose {
                    self.line(format!("  {} wrote {}", self.icon(ARROW), path.display()));
                }
            }
            DeployEvent::PackCompleted {
                archive,
                entries,
                bytes,
            } => self.line(format!(
                "{} Packed {} ({} entries, {} bytes)",
                self.icon(SUCCESS),
                archive.display(),
                entries,
                bytes
            )),
            DeployEvent::PackFailed { error } => {
                self.line(format!("{} Pack failed: {}", self.icon(ERROR), error))
            }
            DeployEvent::DistributeRefused { error } => self.line(format!(
                "{} Deploy did not start: {}",
                self.icon(ERROR),
                error
            )),
            DeployEvent::DistributeStarted {
                archive,
                host_count,
                transport,
            } => self.line(format!(
                "{} Deploying {} to {} host(s) via {}",
                self.icon(PROGRESS),
                archive.display(),
                host_count,
                transport
            )),
            DeployEvent::HostStarted { host, release, .. } => self.line(format!(
                "{} [{}] release {}",
                self.icon(PROGRESS),
                host,
                release.display()
            )),
            DeployEvent::StepStarted { .. } => {}
            DeployEvent::StepCompleted { host, step } => {
                if self.verbose {
                    self.line(format!("  {} [{}] {}", self.icon(ARROW), host, step));
                }
            }
            DeployEvent::HostCompleted { host, .. } => {
                self.line(format!("{} [{}] live", self.icon(SUCCESS), host))
            }
            DeployEvent::HostFailed { host, step, error } => self.line(format!(
                "{} [{}] {} failed: {}",
                self.icon(ERROR),
                host,
                step,
                error
            )),
            DeployEvent::Completed {
                succeeded,
                failed,
                skipped,
            } => {
                let icon = if failed == 0 && skipped == 0 {
                    SUCCESS
                } else {
                    ERROR
                };
                self.line(format!(
                    "{} {} succeeded, {} failed, {} skipped",
                    self.icon(icon),
                    succeeded,
                    failed,
                    skipped
                ))
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
