//! Release plan - the concrete action behind each deploy step
//!
//! Remote paths are built once per (archive, layout) and every shell command
//! quotes them, so release names with spaces or quotes stay intact.

use std::path::{Path, PathBuf};

use super::host_deployment::DeployStep;
use crate::domain::entities::Archive;
use crate::domain::value_objects::RemoteLayout;

/// What the transport has to do for one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    Upload { local: PathBuf, remote: PathBuf },
    Run(String),
}

impl std::fmt::Display for StepAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StepAction::Upload { local, remote } => {
                write!(f, "upload {} -> {}", local.display(), remote.display())
            }
            StepAction::Run(command) => f.write_str(command),
        }
    }
}

/// Paths and commands for deploying one archive
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    local_archive: PathBuf,
    upload: PathBuf,
    release_dir: PathBuf,
    wrapper_dir: PathBuf,
    current_link: PathBuf,
    staged_link: PathBuf,
}

impl ReleasePlan {
    /// `wrapper_name` is the single top-level directory inside the archive.
    pub fn new(archive: &Archive, layout: &RemoteLayout, wrapper_name: &str) -> Self {
        let release_dir = layout.release_dir(archive.base_name());
        Self {
            local_archive: archive.path().to_path_buf(),
            upload: layout.upload_path(archive.file_name()),
            wrapper_dir: release_dir.join(wrapper_name),
            release_dir,
            current_link: layout.current_link().to_path_buf(),
            staged_link: layout.staged_link(),
        }
    }

    pub fn release_dir(&self) -> &Path {
        &self.release_dir
    }

    pub fn upload_path(&self) -> &Path {
        &self.upload
    }

    pub fn action(&self, step: DeployStep) -> StepAction {
        let release = quote_dir(&self.release_dir);
        let upload = quote(&self.upload);

        match step {
            DeployStep::Upload => StepAction::Upload {
                local: self.local_archive.clone(),
                remote: self.upload.clone(),
            },
            DeployStep::CreateReleaseDir => StepAction::Run(format!("mkdir -p {}", release)),
            DeployStep::Extract => {
                StepAction::Run(format!("tar -xzf {} -C {}", upload, release))
            }
            DeployStep::RemoveUpload => StepAction::Run(format!("rm {}", upload)),
            // find instead of a glob so dotfiles move too and an empty tree is fine
            DeployStep::Flatten => StepAction::Run(format!(
                "find {} -mindepth 1 -maxdepth 1 -exec mv -f '{{}}' {} ';'",
                quote(&self.wrapper_dir),
                release
            )),
            DeployStep::RemoveWrapper => {
                StepAction::Run(format!("rm -rf {}", quote(&self.wrapper_dir)))
            }
            DeployStep::StagePointer => StepAction::Run(format!(
                "rm -f {staged} && ln -s {} {staged}",
                release,
                staged = quote(&self.staged_link)
            )),
            DeployStep::SwapPointer => StepAction::Run(format!(
                "mv -Tf {} {}",
                quote(&self.staged_link),
                quote(&self.current_link)
            )),
        }
    }
}

/// Quote a string for safe use in POSIX shell commands
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

fn quote(path: &Path) -> String {
    shell_quote(&path.to_string_lossy())
}

fn quote_dir(path: &Path) -> String {
    shell_quote(&format!("{}/", path.to_string_lossy().trim_end_matches('/')))
}
