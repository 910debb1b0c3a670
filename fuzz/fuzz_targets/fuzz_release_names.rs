#![no_main]

use libfuzzer_sys::fuzz_target;
use webship::domain::services::{DeployStep, ReleasePlan};
use webship::domain::value_objects::RemoteLayout;
use webship::{Archive, Host};

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Host parsing and release planning should never panic
        let _ = Host::parse(input);

        if let Ok(archive) = Archive::from_path(input) {
            let plan = ReleasePlan::new(&archive, &RemoteLayout::default(), "web_static");
            for step in DeployStep::SEQUENCE {
                let _ = plan.action(step).to_string();
            }
        }
    }
});
