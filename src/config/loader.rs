//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::value_objects::Host;
use crate::error::{WebshipError, WebshipResult};

use super::types::{Config, Transport};

/// Config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "webship.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// A resolved configuration and where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File that was loaded, `None` for built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> WebshipResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| WebshipError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Pick the config file, load it, then apply environment overrides.
pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> WebshipResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(WebshipError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Some(path.to_path_buf())
        }
        None => {
            let project = working_dir.join(PROJECT_CONFIG_FILE);
            let user = dirs::config_dir().map(|d| d.join("webship/config.toml"));
            std::iter::once(project)
                .chain(user)
                .find(|p| p.is_file())
        }
    };

    let (config, warnings) = match &candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(path)?
        }
        None => {
            debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    let mut config = config.with_env_overrides()?;
    config.validate()?;
    if let Some(identity) = config.ssh.identity_file.take() {
        config.ssh.identity_file = Some(expand_home(&identity));
    }

    Ok(LoadedConfig {
        config,
        source: candidate,
        warnings,
    })
}

/// Apply environment variable overrides (WEBSHIP_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> WebshipResult<Config> {
    // WEBSHIP_HOSTS (comma-separated)
    if let Some(hosts) = get_env("WEBSHIP_HOSTS") {
        config.deploy.hosts = hosts
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| {
                Host::parse(s).map_err(|e| WebshipError::InvalidValue {
                    key: "WEBSHIP_HOSTS".to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<WebshipResult<Vec<_>>>()?;
    }

    if let Some(transport) = get_env("WEBSHIP_TRANSPORT") {
        config.deploy.transport =
            transport
                .parse::<Transport>()
                .map_err(|message| WebshipError::InvalidValue {
                    key: "WEBSHIP_TRANSPORT".to_string(),
                    message,
                })?;
    }

    if let Some(user) = get_env("WEBSHIP_SSH_USER").filter(|u| !u.is_empty()) {
        config.ssh.user = Some(user);
    }

    if let Some(identity) = get_env("WEBSHIP_SSH_IDENTITY").filter(|i| !i.is_empty()) {
        config.ssh.identity_file = Some(PathBuf::from(identity));
    }

    if let Some(dir) = get_env("WEBSHIP_CONTENT_DIR").filter(|d| !d.is_empty()) {
        config.pack.content_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "pack",
        "content_dir",
        "versions_dir",
        "archive_prefix",
        "marker_file",
        "marker_content",
        "remote",
        "releases_dir",
        "current_link",
        "upload_dir",
        "deploy",
        "hosts",
        "transport",
        "fail_fast",
        "ssh",
        "user",
        "port",
        "identity_file",
        "connect_timeout_secs",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

pub(super) fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
