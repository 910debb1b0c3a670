//! Application Layer
//!
//! Use cases that orchestrate the release flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PackUseCase` - Writes the marker and packs the content directory
//! - `DistributeUseCase` - Pushes an archive to every host through the step machine
//! - `DeployPipeline` - Pack, then distribute

pub mod deploy;
pub mod pack;
pub mod pipeline;

pub use deploy::{DistributeOptions, DistributeUseCase, DistributionReport, HostOutcome};
pub use pack::{PackOptions, PackUseCase, Packager};
pub use pipeline::{DeployOutcome, DeployPipeline, PipelineState};
