//! Test environment for isolated Webship runs.
//!
//! `TestEnv` owns a temp project with a small site under `web_static/`, a
//! `webship.toml` pointing the "remote" layout back into the project, and a
//! temp HOME so no user config leaks in.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{INDEX_HTML, LOCAL_CONFIG, MAIN_CSS};

/// Result of running a Webship CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Site + local-transport config + empty upload dir
    pub fn new() -> Self {
        let env = Self::bare();
        env.write_project_file("web_static/index.html", INDEX_HTML);
        env.write_project_file("web_static/styles/main.css", MAIN_CSS);
        env.write_config(&LOCAL_CONFIG.replace("{root}", &env.root_str()));
        fs::create_dir_all(env.project_path("upload")).unwrap();
        env
    }

    /// Empty project, no config
    pub fn bare() -> Self {
        Self {
            project_root: TempDir::new().unwrap(),
            home_dir: TempDir::new().unwrap(),
        }
    }

    fn root_str(&self) -> String {
        self.project_root.path().display().to_string()
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    pub fn write_config(&self, content: &str) {
        self.write_project_file("webship.toml", content);
    }

    /// Run webship from the project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(bin());
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        for key in [
            "WEBSHIP_HOSTS",
            "WEBSHIP_TRANSPORT",
            "WEBSHIP_SSH_USER",
            "WEBSHIP_SSH_IDENTITY",
            "WEBSHIP_CONTENT_DIR",
        ] {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        output_to_result(cmd.output().unwrap())
    }

    /// Archives currently under `versions/`
    pub fn archives(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.project_path("versions")) else {
            return Vec::new();
        };
        let mut out: Vec<PathBuf> = entries
            .map(|e| e.unwrap().path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "tgz"))
            .collect();
        out.sort();
        out
    }
}

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_webship")
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Relative path -> file bytes (`None` for directories), following symlinks
pub fn tree_snapshot(root: &Path) -> BTreeMap<String, Option<Vec<u8>>> {
    fn walk(root: &Path, dir: &Path, out: &mut BTreeMap<String, Option<Vec<u8>>>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let rel = path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .to_string();
            if path.is_dir() {
                out.insert(rel, None);
                walk(root, &path, out);
            } else {
                out.insert(rel, Some(fs::read(&path).unwrap()));
            }
        }
    }

    let mut out = BTreeMap::new();
    walk(root, root, &mut out);
    out
}
