//! Distribute Use Case
//!
//! Orchestrates the per-host flow:
//! 1. Check the archive exists locally (nothing is sent otherwise)
//! 2. Build the release plan once for the archive
//! 3. Walk every host through the step machine, in configured order
//!
//! A failed host keeps whatever its completed steps changed. Later hosts are
//! still attempted unless `fail_fast` is set.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::entities::Archive;
use crate::domain::ports::{DeployEvent, DeployEventSink, RemoteExecutor};
use crate::domain::services::{HostDeployment, ReleasePlan, StepAction};
use crate::domain::value_objects::Host;
use crate::error::DistributeError;

use super::options::DistributeOptions;
use super::result::{DistributionReport, HostOutcome};

/// Distribute use case - applies one archive to every host
pub struct DistributeUseCase<E: RemoteExecutor> {
    executor: E,
    options: DistributeOptions,
}

impl<E: RemoteExecutor> DistributeUseCase<E> {
    pub fn new(executor: E, options: DistributeOptions) -> Self {
        Self { executor, options }
    }

    pub fn options(&self) -> &DistributeOptions {
        &self.options
    }

    /// Execute the distribute use case
    ///
    /// Returns `Err` only when no host was contacted. Per-host failures are in
    /// the report.
    pub fn execute(
        &self,
        archive_path: &Path,
        events: &dyn DeployEventSink,
    ) -> Result<DistributionReport, DistributeError> {
        let archive = self.preflight(archive_path).inspect_err(|err| {
            warn!(error = %err, "distribution not started");
            events.on_event(DeployEvent::DistributeRefused {
                error: err.to_string(),
            });
        })?;

        let plan = ReleasePlan::new(&archive, &self.options.layout, &self.options.wrapper);
        let transport = self.executor.name();

        info!(
            archive = %archive.path().display(),
            hosts = self.options.hosts.len(),
            transport,
            "distributing"
        );
        events.on_event(DeployEvent::DistributeStarted {
            archive: archive.path().to_path_buf(),
            host_count: self.options.hosts.len(),
            transport,
        });

        let mut outcomes: Vec<HostOutcome> = Vec::with_capacity(self.options.hosts.len());
        let mut skipped = Vec::new();

        for (index, host) in self.options.hosts.iter().enumerate() {
            if self.options.fail_fast && outcomes.iter().any(|o| !o.is_live()) {
                skipped.push(host.clone());
                continue;
            }
            outcomes.push(self.deploy_host(index, host, &plan, events));
        }

        let report = DistributionReport {
            archive,
            transport,
            outcomes,
            skipped,
        };

        events.on_event(DeployEvent::Completed {
            succeeded: report.succeeded(),
            failed: report.failed(),
            skipped: report.skipped.len(),
        });

        Ok(report)
    }

    fn preflight(&self, archive_path: &Path) -> Result<Archive, DistributeError> {
        if !archive_path.is_file() {
            return Err(DistributeError::ArchiveMissing {
                path: archive_path.to_path_buf(),
            });
        }

        let archive =
            Archive::from_path(archive_path).map_err(|_| DistributeError::InvalidArchiveName {
                name: archive_path.display().to_string(),
            })?;

        if self.options.hosts.is_empty() {
            return Err(DistributeError::NoHosts);
        }
        Ok(archive)
    }

    fn deploy_host(
        &self,
        index: usize,
        host: &Host,
        plan: &ReleasePlan,
        events: &dyn DeployEventSink,
    ) -> HostOutcome {
        let mut machine = HostDeployment::new(host.clone());
        let mut failure = None;

        events.on_event(DeployEvent::HostStarted {
            index,
            host: host.clone(),
            release: plan.release_dir().to_path_buf(),
        });

        while let Some(step) = machine.next_step() {
            if events.wants_detailed_events() {
                events.on_event(DeployEvent::StepStarted {
                    host: host.clone(),
                    step,
                });
            }

            let action = plan.action(step);
            debug!(%host, %step, %action, "running step");

            let result = match &action {
                StepAction::Upload { local, remote } => self.executor.upload(host, local, remote),
                StepAction::Run(command) => self.executor.run(host, command).map(|_| ()),
            };

            match result {
                Ok(()) => {
                    if let Err(err) = machine.complete(step) {
                        warn!(%host, error = %err, "step machine rejected completion");
                        break;
                    }
                    if events.wants_detailed_events() {
                        events.on_event(DeployEvent::StepCompleted {
                            host: host.clone(),
                            step,
                        });
                    }
                }
                Err(source) => {
                    if let Err(err) = machine.fail(step) {
                        warn!(%host, error = %err, "step machine rejected failure");
                    }
                    warn!(%host, %step, error = %source, "step failed");
                    events.on_event(DeployEvent::HostFailed {
                        host: host.clone(),
                        step,
                        error: source.to_string(),
                    });
                    failure = Some(DistributeError::Step {
                        host: host.clone(),
                        step,
                        source,
                    });
                    break;
                }
            }
        }

        if machine.is_live() {
            info!(%host, release = %plan.release_dir().display(), "host live");
            events.on_event(DeployEvent::HostCompleted {
                host: host.clone(),
                release: plan.release_dir().to_path_buf(),
            });
        }

        HostOutcome {
            host: host.clone(),
            release_dir: plan.release_dir().to_path_buf(),
            completed: machine.completed_steps().to_vec(),
            failure,
        }
    }
}
