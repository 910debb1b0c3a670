//! Distribute Result

use std::path::PathBuf;

use crate::domain::entities::Archive;
use crate::domain::services::DeployStep;
use crate::domain::value_objects::Host;
use crate::error::DistributeError;

/// What happened on one host
#[derive(Debug)]
pub struct HostOutcome {
    pub host: Host,
    pub release_dir: PathBuf,
    /// Steps that succeeded, in order. Nothing is rolled back on failure.
    pub completed: Vec<DeployStep>,
    /// The step that failed and why
    pub failure: Option<DistributeError>,
}

impl HostOutcome {
    pub fn is_live(&self) -> bool {
        self.failure.is_none() && self.completed.len() == DeployStep::SEQUENCE.len()
    }
}

/// Result of distributing one archive
#[derive(Debug)]
pub struct DistributionReport {
    pub archive: Archive,
    pub transport: &'static str,
    /// Hosts that were attempted, in order
    pub outcomes: Vec<HostOutcome>,
    /// Hosts never attempted because an earlier host failed with fail-fast on
    pub skipped: Vec<Host>,
}

impl DistributionReport {
    /// True only when every configured host went live
    pub fn is_success(&self) -> bool {
        self.skipped.is_empty() && self.outcomes.iter().all(HostOutcome::is_live)
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_live()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// Step failures, first host first
    pub fn failures(&self) -> impl Iterator<Item = &DistributeError> {
        self.outcomes.iter().filter_map(|o| o.failure.as_ref())
    }
}
