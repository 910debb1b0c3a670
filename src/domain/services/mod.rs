//! Domain Services
//!
//! - `host_deployment` - the per-host step machine
//! - `release_plan` - the concrete action behind each step

mod host_deployment;
mod release_plan;

pub use host_deployment::{DeployStep, HostDeployment, HostState, TransitionError};
pub use release_plan::{shell_quote, ReleasePlan, StepAction};
