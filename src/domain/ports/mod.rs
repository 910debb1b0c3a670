//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod deploy_events;
pub mod remote_executor;

pub use clock::Clock;
pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use remote_executor::{CommandOutput, RemoteError, RemoteExecutor};
