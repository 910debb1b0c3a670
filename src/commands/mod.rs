//! Subcommand handlers
//!
//! Each handler returns `Ok(false)` when the operation ran but did not succeed,
//! which `main` turns into exit status 1.

pub mod deploy;
pub mod pack;

use is_terminal::IsTerminal;
use std::path::Path;

use webship::config::ConfigWarning;
use webship::domain::ports::DeployEventSink;
use webship::infrastructure::{ConsoleEventSink, JsonEventSink};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}

/// NDJSON for `--json`, progress lines otherwise
pub fn event_sink(command: &'static str, json: bool, verbose: u8) -> Box<dyn DeployEventSink> {
    if json {
        Box::new(JsonEventSink::stdout(command))
    } else {
        let color = color_enabled(
            |key| std::env::var(key).ok(),
            std::io::stdout().is_terminal(),
        );
        Box::new(ConsoleEventSink::stdout(color, verbose > 0))
    }
}

fn color_enabled(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    let term = get_env("TERM").unwrap_or_default();
    is_tty && !term.eq_ignore_ascii_case("dumb") && get_env("NO_COLOR").is_none()
}
