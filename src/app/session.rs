// Showroom - app/session.rs
//
// Session persistence: remember the last sort key and category between runs.
//
// Only browse preferences live here, never catalog records. A session that
// cannot be restored is dropped and the defaults apply.

use crate::util::constants::SESSION_FILE_NAME;
use crate::util::error::{Result, ShowroomError};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `SessionData` changes in a breaking way. Version
/// mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Persistent browse preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version; must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    /// Sort key, e.g. "price-low". Parsed leniently on restore.
    #[serde(default)]
    pub sort: String,

    /// Category label, or "all".
    #[serde(default)]
    pub category: String,
}

impl SessionData {
    pub fn new(sort: &str, category: &str) -> Self {
        Self {
            version: SESSION_VERSION,
            sort: sort.to_string(),
            category: category.to_string(),
        }
    }
}

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Persist `data` at `path`, replacing any previous session in one step.
///
/// The JSON is staged in a sibling `.json.tmp` file and renamed over the
/// target, so readers only ever see a complete file. Parent directories are
/// created on demand.
pub fn save(data: &SessionData, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .map_err(|source| io_error(dir, "create session directory", source))?;
    }

    let staging = path.with_extension("json.tmp");
    write_staged(data, &staging).map_err(|source| io_error(&staging, "stage session", source))?;

    if let Err(source) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(io_error(path, "replace session", source));
    }

    tracing::debug!(path = %path.display(), sort = %data.sort, "Session saved");
    Ok(())
}

fn write_staged(data: &SessionData, staging: &Path) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(staging)?);
    serde_json::to_writer_pretty(&mut out, data)?;
    out.flush()
}

fn io_error(path: &Path, operation: &'static str, source: io::Error) -> ShowroomError {
    ShowroomError::Io {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

/// Restore preferences from `path`.
///
/// `None` means "start fresh": no file yet, an unreadable or malformed file,
/// or a file written by another schema version.
pub fn load(path: &Path) -> Option<SessionData> {
    match read_session(path) {
        Ok(data) if data.version == SESSION_VERSION => {
            tracing::debug!(path = %path.display(), sort = %data.sort, "Session restored");
            Some(data)
        }
        Ok(data) => {
            tracing::warn!(
                found = data.version,
                expected = SESSION_VERSION,
                "Ignoring session from another version"
            );
            None
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring unreadable session");
            None
        }
    }
}

fn read_session(path: &Path) -> io::Result<SessionData> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_session_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        let original = SessionData::new("rating", "Minimalist");

        save(&original, &path).expect("save should succeed");
        assert_eq!(load(&path), Some(original));
    }

    #[test]
    fn test_session_save_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = session_path(&dir.path().join("nested").join("data"));
        save(&SessionData::new("recent", "all"), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_session_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nonexistent.json")).is_none());
    }

    #[test]
    fn test_session_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_session_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        let mut data = SessionData::new("rating", "all");
        data.version = 99;
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_save_reports_failing_operation() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"a file, not a directory").unwrap();

        let err = save(&SessionData::new("rating", "all"), &blocker.join("session.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            ShowroomError::Io {
                operation: "create session directory",
                ..
            }
        ));
    }

    #[test]
    fn test_session_missing_fields_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        std::fs::write(&path, br#"{"version": 1}"#).unwrap();
        let data = load(&path).unwrap();
        assert!(data.sort.is_empty());
        assert!(data.category.is_empty());
    }

    #[test]
    fn test_leftover_temp_file_does_not_block_save() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        save(&SessionData::new("title-asc", "all"), &path).unwrap();
        assert_eq!(load(&path).unwrap().sort, "title-asc");
    }
}
