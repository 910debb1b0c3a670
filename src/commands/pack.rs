use anyhow::Result;

use webship::application::{PackOptions, PackUseCase, Packager};
use webship::config::Config;
use webship::infrastructure::SystemClock;

/// Pack the content directory. Prints the archive path on success.
pub fn cmd_do_pack(config: &Config, json: bool, verbose: u8) -> Result<bool> {
    let events = super::event_sink("do_pack", json, verbose);
    let packager = PackUseCase::new(SystemClock, PackOptions::from_config(config));

    match packager.pack(events.as_ref()) {
        Ok(archive) => {
            if !json {
                println!("{}", archive.path().display());
            }
            Ok(true)
        }
        // the sink already reported it
        Err(_) => Ok(false),
    }
}
