//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod host;
mod layout;
mod timestamp;

pub use host::{Host, HostParseError};
pub use layout::RemoteLayout;
pub use timestamp::{parse_timestamp_label, timestamp_label, TIMESTAMP_FORMAT};
