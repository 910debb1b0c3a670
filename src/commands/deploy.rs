use std::path::Path;

use anyhow::Result;

use webship::application::{
    DeployPipeline, DistributeOptions, DistributeUseCase, PackOptions, PackUseCase,
};
use webship::config::Config;
use webship::error::DistributeError;
use webship::infrastructure::{executor_for, SystemClock};

/// Push an existing archive to every configured host.
pub fn cmd_do_deploy(archive: &Path, config: &Config, json: bool, verbose: u8) -> Result<bool> {
    let events = super::event_sink("do_deploy", json, verbose);
    let use_case = DistributeUseCase::new(executor_for(config), DistributeOptions::from_config(config));

    match use_case.execute(archive, events.as_ref()) {
        Ok(report) => Ok(report.is_success()),
        Err(err) => {
            print_hint(&err);
            Ok(false)
        }
    }
}

/// Pack, then push the new archive.
pub fn cmd_deploy(config: &Config, json: bool, verbose: u8) -> Result<bool> {
    let events = super::event_sink("deploy", json, verbose);
    let pipeline = DeployPipeline::new(
        PackUseCase::new(SystemClock, PackOptions::from_config(config)),
        DistributeUseCase::new(executor_for(config), DistributeOptions::from_config(config)),
    );

    let outcome = pipeline.run(events.as_ref());
    if let Some(err) = &outcome.distribute_error {
        print_hint(err);
    }
    Ok(outcome.is_success())
}

// the sink already reported the error itself
fn print_hint(err: &DistributeError) {
    if matches!(err, DistributeError::NoHosts) {
        eprintln!("   Add hosts under [deploy] in webship.toml or set WEBSHIP_HOSTS.");
    }
}
