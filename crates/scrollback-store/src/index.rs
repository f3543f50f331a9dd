use std::path::PathBuf;

use scrollback_types::{Error, RecordKind, Result, Session};

use crate::loader::{dir_name, list_dirs, list_record_files, load_record, Store};

/// Reverse-chronological listing of every session across all projects.
#[derive(Debug, Default)]
pub struct SessionIndex {
    /// Sorted by `time.updated` descending; enumeration order breaks ties
    pub sessions: Vec<Session>,
    /// Malformed records skipped during the bulk listing. Never silently
    /// dropped: callers surface these as warnings.
    pub skipped: Vec<SkippedRecord>,
}

/// A record that existed but could not be loaded during a bulk listing
#[derive(Debug)]
pub struct SkippedRecord {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedRecord {
    pub(crate) fn from_error(path: PathBuf, err: &Error) -> Self {
        Self {
            path,
            reason: err.to_string(),
        }
    }
}

impl Store {
    /// Enumerate every project subdirectory under the session root and build
    /// the index. Load everything first, then sort: loading and ordering stay
    /// independently testable, and output never depends on filesystem
    /// enumeration order.
    ///
    /// A root that cannot be enumerated is `StorageUnavailable`; that is a
    /// different condition from an empty result and is reported as such.
    pub fn session_index(&self) -> Result<SessionIndex> {
        let mut index = SessionIndex::default();

        for project_dir in list_dirs(&self.session_root())? {
            let project_id = dir_name(&project_dir);

            for path in list_record_files(&project_dir)? {
                match load_record::<Session>(&path, RecordKind::Session) {
                    Ok(mut session) => {
                        // The only mutation loader output undergoes: backfill
                        // a missing projectID from the enclosing directory.
                        if session.project_id.is_none() {
                            session.project_id = project_id.clone();
                        }
                        index.sessions.push(session);
                    }
                    Err(err @ Error::MalformedRecord { .. }) => {
                        index.skipped.push(SkippedRecord::from_error(path, &err));
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        // Stable sort keeps enumeration order on update-timestamp ties
        index.sessions.sort_by_key(|s| std::cmp::Reverse(s.time.updated));

        Ok(index)
    }
}
