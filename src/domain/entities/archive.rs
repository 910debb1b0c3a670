//! Archive entity - one packaged snapshot of the content tree
//!
//! Archives are named `<prefix>_<YYYYmmddHHMMSS>.tgz`. The part of the file
//! name before the first `.` is the base name, which doubles as the release
//! directory name on every host.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::value_objects::{parse_timestamp_label, timestamp_label};

pub const ARCHIVE_EXTENSION: &str = "tgz";

/// The archive path cannot be turned into a release name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArchiveNameError {
    #[error("archive path '{0}' has no file name")]
    NoFileName(PathBuf),
    #[error("archive file name '{0}' is not valid UTF-8")]
    NotUtf8(PathBuf),
    #[error("archive file name '{0}' has an empty base name")]
    EmptyBaseName(String),
}

/// A packaged snapshot of the content directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archive {
    path: PathBuf,
    file_name: String,
    base_name: String,
    created_at: Option<NaiveDateTime>,
}

impl Archive {
    /// Name the archive the packager will write for `at`.
    ///
    /// A `.` in `prefix` becomes `_`, so the base name read back by
    /// [`Archive::from_path`] is the full prefix plus timestamp.
    pub fn for_timestamp(versions_dir: &Path, prefix: &str, at: NaiveDateTime) -> Self {
        let base_name = format!("{}_{}", prefix.replace('.', "_"), timestamp_label(at));
        let file_name = format!("{}.{}", base_name, ARCHIVE_EXTENSION);
        Self {
            path: versions_dir.join(&file_name),
            file_name,
            base_name,
            created_at: Some(at),
        }
    }

    /// Describe an existing archive path. The file does not need to exist.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, ArchiveNameError> {
        let path = path.into();
        let file_name = path
            .file_name()
            .ok_or_else(|| ArchiveNameError::NoFileName(path.clone()))?
            .to_str()
            .ok_or_else(|| ArchiveNameError::NotUtf8(path.clone()))?
            .to_string();

        let base_name = file_name
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();
        if base_name.is_empty() {
            return Err(ArchiveNameError::EmptyBaseName(file_name));
        }

        let created_at = base_name
            .rsplit_once('_')
            .and_then(|(_, label)| parse_timestamp_label(label));

        Ok(Self {
            path,
            file_name,
            base_name,
            created_at,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last path component, e.g. `web_static_20240101120000.tgz`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// File name up to the first `.`, e.g. `web_static_20240101120000`
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Timestamp embedded in the name, when the name follows the convention
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap()
    }

    #[test]
    fn for_timestamp_builds_conventional_name() {
        let archive = Archive::for_timestamp(Path::new("versions"), "web_static", at());
        assert_eq!(
            archive.path(),
            Path::new("versions/web_static_20240102030405.tgz")
        );
        assert_eq!(archive.file_name(), "web_static_20240102030405.tgz");
        assert_eq!(archive.base_name(), "web_static_20240102030405");
        assert_eq!(archive.created_at(), Some(at()));
    }

    #[test]
    fn from_path_recovers_timestamp() {
        let archive = Archive::from_path("versions/web_static_20240102030405.tgz").unwrap();
        assert_eq!(archive.base_name(), "web_static_20240102030405");
        assert_eq!(archive.created_at(), Some(at()));
    }

    #[test]
    fn base_name_stops_at_first_dot() {
        let archive = Archive::from_path("/tmp/site.v2.tar.gz").unwrap();
        assert_eq!(archive.file_name(), "site.v2.tar.gz");
        assert_eq!(archive.base_name(), "site");
        assert_eq!(archive.created_at(), None);
    }

    #[test]
    fn rejects_names_without_base() {
        assert_eq!(
            Archive::from_path("versions/.tgz"),
            Err(ArchiveNameError::EmptyBaseName(".tgz".to_string()))
        );
        assert!(matches!(
            Archive::from_path("/"),
            Err(ArchiveNameError::NoFileName(_))
        ));
    }

    #[test]
    fn dotted_prefix_keeps_distinct_releases() {
        let later = at() + chrono::Duration::seconds(1);
        let first = Archive::for_timestamp(Path::new("versions"), "example.com", at());
        let second = Archive::for_timestamp(Path::new("versions"), "example.com", later);

        assert_eq!(first.file_name(), "example_com_20240102030405.tgz");

        let first_back = Archive::from_path(first.path()).unwrap();
        let second_back = Archive::from_path(second.path()).unwrap();
        assert_eq!(first_back.base_name(), first.base_name());
        assert_eq!(first_back.created_at(), Some(at()));
        assert_ne!(first_back.base_name(), second_back.base_name());
    }

    proptest! {
        #[test]
        fn generated_names_parse_back(
            prefix in "[a-z][a-z_.]{0,12}",
            secs in 0i64..4_000_000_000,
        ) {
            let at = chrono::DateTime::from_timestamp(secs, 0).unwrap().naive_utc();
            let built = Archive::for_timestamp(Path::new("versions"), &prefix, at);
            let parsed = Archive::from_path(built.path()).unwrap();
            prop_assert_eq!(parsed.base_name(), built.base_name());
            prop_assert_eq!(parsed.created_at(), Some(at));
        }
    }
}
