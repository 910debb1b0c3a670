//! Deploy pipeline: pack, then distribute what was packed
//!
//! ```text
//! Packaging --ok--> Packaged --> Distributing --all live--> Done
//!     |                              |
//!     +--> PackFailed                +--> DistributeFailed
//! ```
//!
//! No host is contacted when packaging fails.

use tracing::debug;

use crate::domain::entities::Archive;
use crate::domain::ports::{DeployEventSink, RemoteExecutor};
use crate::error::{DistributeError, PackError};

use super::deploy::{DistributeUseCase, DistributionReport};
use super::pack::Packager;

/// Where the pipeline stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Packaging,
    PackFailed,
    Packaged,
    Distributing,
    DistributeFailed,
    Done,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PipelineState::PackFailed | PipelineState::DistributeFailed | PipelineState::Done
        )
    }
}

/// Everything a finished pipeline run knows
#[derive(Debug)]
pub struct DeployOutcome {
    pub state: PipelineState,
    pub archive: Option<Archive>,
    pub pack_error: Option<PackError>,
    /// Set when distribution could not start
    pub distribute_error: Option<DistributeError>,
    pub report: Option<DistributionReport>,
}

impl DeployOutcome {
    pub fn is_success(&self) -> bool {
        self.state == PipelineState::Done
    }
}

/// Packs with `P` and hands the archive to the distributor
pub struct DeployPipeline<P: Packager, E: RemoteExecutor> {
    packager: P,
    distributor: DistributeUseCase<E>,
}

impl<P: Packager, E: RemoteExecutor> DeployPipeline<P, E> {
    pub fn new(packager: P, distributor: DistributeUseCase<E>) -> Self {
        Self {
            packager,
            distributor,
        }
    }

    pub fn run(&self, events: &dyn DeployEventSink) -> DeployOutcome {
        let mut outcome = DeployOutcome {
            state: PipelineState::Packaging,
            archive: None,
            pack_error: None,
            distribute_error: None,
            report: None,
        };

        while !outcome.state.is_terminal() {
            debug!(state = ?outcome.state, "deploy pipeline");
            outcome.state = match outcome.state {
                PipelineState::Packaging => match self.packager.pack(events) {
                    Ok(archive) => {
                        outcome.archive = Some(archive);
                        PipelineState::Packaged
                    }
                    Err(err) => {
                        outcome.pack_error = Some(err);
                        PipelineState::PackFailed
                    }
                },
                PipelineState::Packaged => PipelineState::Distributing,
                PipelineState::Distributing => match &outcome.archive {
                    Some(archive) => match self.distributor.execute(archive.path(), events) {
                        Ok(report) => {
                            let next = if report.is_success() {
                                PipelineState::Done
                            } else {
                                PipelineState::DistributeFailed
                            };
                            outcome.report = Some(report);
                            next
                        }
                        Err(err) => {
                            outcome.distribute_error = Some(err);
                            PipelineState::DistributeFailed
                        }
                    },
                    None => PipelineState::PackFailed,
                },
                terminal => terminal,
            };
        }

        debug!(state = ?outcome.state, "deploy pipeline finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::deploy::tests::{archive_in, options_for, MockRemoteExecutor};
    use crate::domain::ports::NoopEventSink;
    use std::cell::Cell;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Packager stub that either fails or returns a fixed archive
    struct StubPackager {
        archive: Option<PathBuf>,
        calls: Cell<usize>,
    }

    impl Packager for StubPackager {
        fn pack(&self, _events: &dyn DeployEventSink) -> Result<Archive, PackError> {
            self.calls.set(self.calls.get() + 1);
            match &self.archive {
                Some(path) => Ok(Archive::from_path(path.clone()).unwrap()),
                None => Err(PackError::ContentMissing {
                    path: PathBuf::from("web_static"),
                }),
            }
        }
    }

    #[test]
    fn pack_failure_never_contacts_hosts() {
        let executor = MockRemoteExecutor::new();
        let packager = StubPackager {
            archive: None,
            calls: Cell::new(0),
        };
        let distributor = DistributeUseCase::new(&executor, options_for(&["web-01", "web-02"]));
        let pipeline = DeployPipeline::new(&packager, distributor);

        let outcome = pipeline.run(&NoopEventSink);

        assert_eq!(outcome.state, PipelineState::PackFailed);
        assert!(!outcome.is_success());
        assert!(outcome.pack_error.is_some());
        assert!(outcome.report.is_none());
        assert_eq!(packager.calls.get(), 1);
        assert_eq!(executor.call_count(), 0);
    }

    #[test]
    fn packed_archive_is_distributed() {
        let dir = tempdir().unwrap();
        let archive = archive_in(dir.path());
        let executor = MockRemoteExecutor::new();
        let packager = StubPackager {
            archive: Some(archive.clone()),
            calls: Cell::new(0),
        };
        let distributor = DistributeUseCase::new(&executor, options_for(&["web-01"]));

        let outcome = DeployPipeline::new(packager, distributor).run(&NoopEventSink);

        assert_eq!(outcome.state, PipelineState::Done);
        assert!(outcome.is_success());
        assert_eq!(outcome.archive.unwrap().path(), archive.as_path());
        assert_eq!(executor.call_count(), 8);
    }

    #[test]
    fn host_failure_ends_in_distribute_failed() {
        let dir = tempdir().unwrap();
        let executor = MockRemoteExecutor::new().fail_on("web-01", "tar -xzf");
        let packager = StubPackager {
            archive: Some(archive_in(dir.path())),
            calls: Cell::new(0),
        };
        let distributor = DistributeUseCase::new(&executor, options_for(&["web-01"]));

        let outcome = DeployPipeline::new(packager, distributor).run(&NoopEventSink);

        assert_eq!(outcome.state, PipelineState::DistributeFailed);
        assert!(outcome.report.is_some());
        assert!(outcome.distribute_error.is_none());
    }

    #[test]
    fn empty_host_list_ends_in_distribute_failed() {
        let dir = tempdir().unwrap();
        let executor = MockRemoteExecutor::new();
        let packager = StubPackager {
            archive: Some(archive_in(dir.path())),
            calls: Cell::new(0),
        };
        let distributor = DistributeUseCase::new(&executor, options_for(&[]));

        let outcome = DeployPipeline::new(packager, distributor).run(&NoopEventSink);

        assert_eq!(outcome.state, PipelineState::DistributeFailed);
        assert!(matches!(outcome.distribute_error, Some(DistributeError::NoHosts)));
        assert_eq!(executor.call_count(), 0);
    }
}
