//! Pack Module
//!
//! Turns the content directory into a timestamped archive.
//!
//! ## Structure
//!
//! - `options` - What to pack and where (`PackOptions`)
//! - `use_case` - The packager (`PackUseCase`) and the `Packager` seam
//!
//! ## Usage
//!
//! ```ignore
//! use webship::application::pack::{PackOptions, PackUseCase, Packager};
//!
//! let packager = PackUseCase::new(SystemClock, PackOptions::from_config(&config));
//! let archive = packager.pack(&NoopEventSink)?;
//! ```

mod options;
mod use_case;

pub use options::PackOptions;
pub use use_case::{PackUseCase, Packager};
