use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use scrollback_types::{Error, RecordKind, Result, Session};

/// Handle on one storage root. Construction is cheap; every operation is a
/// fresh read with no caching between invocations.
#[derive(Debug, Clone)]
pub struct Store {
    root: PathBuf,
}

impl Store {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn session_root(&self) -> PathBuf {
        self.root.join("session")
    }

    pub fn message_dir(&self, session_id: &str) -> PathBuf {
        self.root.join("message").join(session_id)
    }

    pub fn part_dir(&self, message_id: &str) -> PathBuf {
        self.root.join("part").join(message_id)
    }

    /// Look up one session record by identifier across all projects.
    ///
    /// This is the hard-error path for a directly requested id: absence is
    /// `NotFound`, unlike listings where absence means zero results.
    pub fn find_session(&self, session_id: &str) -> Result<Session> {
        let filename = format!("{}.json", session_id);

        for project_dir in list_dirs(&self.session_root())? {
            let path = project_dir.join(&filename);
            if path.is_file() {
                let mut session: Session = load_record(&path, RecordKind::Session)?;
                if session.project_id.is_none() {
                    session.project_id = dir_name(&project_dir);
                }
                return Ok(session);
            }
        }

        Err(Error::NotFound {
            kind: RecordKind::Session,
            id: session_id.to_string(),
        })
    }
}

/// Read and parse one JSON record.
///
/// An absent path is `NotFound` (listings avoid it by enumerating first; a
/// directly requested identifier treats it as a hard error). Unparseable
/// content is `MalformedRecord`. Missing optional fields inside the record
/// default to absent via serde, never to a sentinel.
pub(crate) fn load_record<T: DeserializeOwned>(path: &Path, kind: RecordKind) -> Result<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::NotFound {
                kind,
                id: record_id(path),
            });
        }
        Err(source) => {
            return Err(Error::StorageUnavailable {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&content).map_err(|source| Error::MalformedRecord {
        path: path.to_path_buf(),
        source,
    })
}

/// Record identifier from a storage path (`.../<id>.json`)
pub(crate) fn record_id(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Enumerate subdirectories, sorted by name for run-to-run determinism
pub(crate) fn list_dirs(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path).map_err(|source| Error::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Enumerate `.json` record files in one directory, sorted by file name.
///
/// Name order doubles as the authoritative part sequence: part records carry
/// no independent ordering key, and their time-prefixed ids make name order
/// the best available proxy for generation order.
pub(crate) fn list_record_files(path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(path).map_err(|source| Error::StorageUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

pub(crate) fn dir_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
