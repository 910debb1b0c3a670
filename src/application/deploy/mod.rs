//! Deploy Module
//!
//! Pushes an existing archive to every configured host, one host at a time.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DistributeOptions`)
//! - `result` - Result types (`DistributionReport`, `HostOutcome`)
//! - `use_case` - Core use case logic (`DistributeUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use webship::application::deploy::{DistributeOptions, DistributeUseCase};
//!
//! let use_case = DistributeUseCase::new(executor, DistributeOptions::from_config(&config));
//! let report = use_case.execute(Path::new("versions/web_static_20240101120000.tgz"), &sink)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DistributeOptions;
pub use result::{DistributionReport, HostOutcome};
pub use use_case::DistributeUseCase;
