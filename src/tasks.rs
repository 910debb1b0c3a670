//! Task-runner entry points
//!
//! Thin wrappers that keep the classic contract: `do_pack` yields a path or
//! nothing, `do_deploy` and `deploy` yield a bool. The reason for a failure is
//! logged through `tracing` and otherwise dropped. Use the application layer
//! directly to get it.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::application::{
    DeployPipeline, DistributeOptions, DistributeUseCase, PackOptions, PackUseCase, Packager,
};
use crate::config::Config;
use crate::domain::ports::NoopEventSink;
use crate::infrastructure::{executor_for, SystemClock};

/// Pack the content directory. `None` when no archive was produced.
pub fn do_pack(config: &Config) -> Option<PathBuf> {
    let packager = PackUseCase::new(SystemClock, PackOptions::from_config(config));
    match packager.pack(&NoopEventSink) {
        Ok(archive) => Some(archive.path().to_path_buf()),
        Err(err) => {
            warn!(error = %err, "do_pack produced no archive");
            None
        }
    }
}

/// Distribute `archive_path` to every configured host.
pub fn do_deploy(archive_path: &Path, config: &Config) -> bool {
    let use_case = DistributeUseCase::new(executor_for(config), DistributeOptions::from_config(config));
    match use_case.execute(archive_path, &NoopEventSink) {
        Ok(report) => {
            for failure in report.failures() {
                warn!(error = %failure, "do_deploy");
            }
            report.is_success()
        }
        Err(err) => {
            warn!(error = %err, "do_deploy");
            false
        }
    }
}

/// Pack, then distribute the new archive.
pub fn deploy(config: &Config) -> bool {
    let pipeline = DeployPipeline::new(
        PackUseCase::new(SystemClock, PackOptions::from_config(config)),
        DistributeUseCase::new(executor_for(config), DistributeOptions::from_config(config)),
    );
    let outcome = pipeline.run(&NoopEventSink);
    if let Some(err) = &outcome.pack_error {
        warn!(error = %err, "deploy: pack failed");
    }
    if let Some(err) = &outcome.distribute_error {
        warn!(error = %err, "deploy: distribute failed");
    }
    if let Some(report) = &outcome.report {
        for failure in report.failures() {
            warn!(error = %failure, "deploy");
        }
    }
    outcome.is_success()
}
