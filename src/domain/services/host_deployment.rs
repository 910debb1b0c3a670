//! Per-host deployment state machine
//!
//! A host moves through the eight steps strictly in order:
//!
//! ```text
//! Pending -> upload -> create-release-dir -> extract -> remove-upload
//!         -> flatten -> remove-wrapper -> stage-pointer -> swap-pointer -> Live
//! ```
//!
//! Any step may fail, which parks the host in `Failed`. Nothing is undone.

use thiserror::Error;

use crate::domain::value_objects::Host;

/// One step of a host deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployStep {
    /// Copy the archive to the upload directory
    Upload,
    /// `mkdir -p` the release directory
    CreateReleaseDir,
    /// Unpack the archive into the release directory
    Extract,
    /// Delete the uploaded archive
    RemoveUpload,
    /// Move the wrapper directory's entries up to the release root
    Flatten,
    /// Delete the now-empty wrapper directory
    RemoveWrapper,
    /// Create the new pointer under a staging name
    StagePointer,
    /// Rename the staged pointer over the current one
    SwapPointer,
}

impl DeployStep {
    pub const SEQUENCE: [DeployStep; 8] = [
        DeployStep::Upload,
        DeployStep::CreateReleaseDir,
        DeployStep::Extract,
        DeployStep::RemoveUpload,
        DeployStep::Flatten,
        DeployStep::RemoveWrapper,
        DeployStep::StagePointer,
        DeployStep::SwapPointer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeployStep::Upload => "upload",
            DeployStep::CreateReleaseDir => "create-release-dir",
            DeployStep::Extract => "extract",
            DeployStep::RemoveUpload => "remove-upload",
            DeployStep::Flatten => "flatten",
            DeployStep::RemoveWrapper => "remove-wrapper",
            DeployStep::StagePointer => "stage-pointer",
            DeployStep::SwapPointer => "swap-pointer",
        }
    }

    fn position(self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    /// Step that follows this one, `None` after `SwapPointer`
    pub fn next(self) -> Option<DeployStep> {
        Self::SEQUENCE.get(self.position() + 1).copied()
    }
}

impl std::fmt::Display for DeployStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a host deployment stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    /// Nothing has run yet
    Pending,
    /// `completed` and every step before it succeeded
    InProgress { completed: DeployStep },
    /// All steps succeeded
    Live,
    /// `step` failed after `completed` (if any) succeeded
    Failed {
        step: DeployStep,
        completed: Option<DeployStep>,
    },
}

/// A step was reported out of order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("step '{attempted}' cannot run now (next step: {})", .expected.map(DeployStep::label).unwrap_or("none"))]
    OutOfOrder {
        expected: Option<DeployStep>,
        attempted: DeployStep,
    },
}

/// Step machine for one host
#[derive(Debug, Clone)]
pub struct HostDeployment {
    host: Host,
    state: HostState,
}

impl HostDeployment {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            state: HostState::Pending,
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn state(&self) -> HostState {
        self.state
    }

    /// Next step allowed to run, `None` once the host is live or failed
    pub fn next_step(&self) -> Option<DeployStep> {
        match self.state {
            HostState::Pending => Some(DeployStep::Upload),
            HostState::InProgress { completed } => completed.next(),
            HostState::Live | HostState::Failed { .. } => None,
        }
    }

    fn guard(&self, step: DeployStep) -> Result<(), TransitionError> {
        let expected = self.next_step();
        if expected == Some(step) {
            Ok(())
        } else {
            Err(TransitionError::OutOfOrder {
                expected,
                attempted: step,
            })
        }
    }

    /// Record that `step` succeeded.
    pub fn complete(&mut self, step: DeployStep) -> Result<(), TransitionError> {
        self.guard(step)?;
        self.state = match step.next() {
            Some(_) => HostState::InProgress { completed: step },
            None => HostState::Live,
        };
        Ok(())
    }

    /// Record that `step` failed. The host accepts no further steps.
    pub fn fail(&mut self, step: DeployStep) -> Result<(), TransitionError> {
        self.guard(step)?;
        self.state = HostState::Failed {
            step,
            completed: self.last_completed(),
        };
        Ok(())
    }

    fn last_completed(&self) -> Option<DeployStep> {
        match self.state {
            HostState::Pending => None,
            HostState::InProgress { completed } => Some(completed),
            HostState::Live => Some(DeployStep::SwapPointer),
            HostState::Failed { completed, .. } => completed,
        }
    }

    /// Steps that succeeded so far, in order
    pub fn completed_steps(&self) -> &'static [DeployStep] {
        match self.last_completed() {
            Some(step) => &DeployStep::SEQUENCE[..=step.position()],
            None => &[],
        }
    }

    pub fn is_live(&self) -> bool {
        self.state == HostState::Live
    }

    pub fn failed_step(&self) -> Option<DeployStep> {
        match self.state {
            HostState::Failed { step, .. } => Some(step),
            _ => None,
        }
    }
}
