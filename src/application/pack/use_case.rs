//! Pack Use Case
//!
//! 1. Check the content directory
//! 2. Create the versions directory
//! 3. Name the archive from the clock
//! 4. Write the marker file into the content directory
//! 5. Write the gzip tar

use std::fs;
use std::io;

use tracing::{debug, warn};

use crate::domain::entities::Archive;
use crate::domain::ports::{Clock, DeployEvent, DeployEventSink};
use crate::error::PackError;
use crate::infrastructure::write_tar_gz;

use super::options::PackOptions;

/// Something that produces an archive to distribute
pub trait Packager {
    fn pack(&self, events: &dyn DeployEventSink) -> Result<Archive, PackError>;
}

impl<P: Packager + ?Sized> Packager for &P {
    fn pack(&self, events: &dyn DeployEventSink) -> Result<Archive, PackError> {
        (**self).pack(events)
    }
}

/// Packages the content directory into `versions/<prefix>_<timestamp>.tgz`
pub struct PackUseCase<C: Clock> {
    clock: C,
    options: PackOptions,
}

impl<C: Clock> PackUseCase<C> {
    pub fn new(clock: C, options: PackOptions) -> Self {
        Self { clock, options }
    }

    pub fn options(&self) -> &PackOptions {
        &self.options
    }

    fn run(&self, events: &dyn DeployEventSink) -> Result<Archive, PackError> {
        let options = &self.options;

        if !options.content_dir.is_dir() {
            return Err(PackError::ContentMissing {
                path: options.content_dir.clone(),
            });
        }

        fs::create_dir_all(&options.versions_dir).map_err(|source| PackError::VersionsDir {
            path: options.versions_dir.clone(),
            source,
        })?;

        let archive = Archive::for_timestamp(&options.versions_dir, &options.prefix, self.clock.now());
        if archive.path().exists() {
            return Err(PackError::ArchiveExists {
                path: archive.path().to_path_buf(),
            });
        }

        events.on_event(DeployEvent::PackStarted {
            content_dir: options.content_dir.clone(),
            archive: archive.path().to_path_buf(),
        });

        let marker = options.content_dir.join(&options.marker_file);
        fs::write(&marker, &options.marker_content).map_err(|source| PackError::Marker {
            path: marker.clone(),
            source,
        })?;
        debug!(path = %marker.display(), "marker written");
        if events.wants_detailed_events() {
            events.on_event(DeployEvent::MarkerWritten { path: marker });
        }

        let summary = write_tar_gz(&options.content_dir, &options.wrapper, archive.path())
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => PackError::ArchiveExists {
                    path: archive.path().to_path_buf(),
                },
                _ => PackError::Archive {
                    path: archive.path().to_path_buf(),
                    source,
                },
            })?;

        events.on_event(DeployEvent::PackCompleted {
            archive: archive.path().to_path_buf(),
            entries: summary.entries,
            bytes: summary.bytes,
        });

        Ok(archive)
    }
}

impl<C: Clock> Packager for PackUseCase<C> {
    fn pack(&self, events: &dyn DeployEventSink) -> Result<Archive, PackError> {
        self.run(events).inspect_err(|err| {
            warn!(error = %err, "pack failed");
            events.on_event(DeployEvent::PackFailed {
                error: err.to_string(),
            });
        })
    }
}
