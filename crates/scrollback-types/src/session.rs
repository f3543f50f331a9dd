use serde::{Deserialize, Serialize};

/// Project scope sentinel for sessions not bound to a working directory
pub const GLOBAL_PROJECT: &str = "global";

/// One stored conversation, scoped to a project or the global context.
///
/// Written by the external session runner as
/// `<root>/session/<projectID>/<sessionID>.json`; this crate only ever reads
/// immutable snapshots of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub directory: String,
    /// Missing in older records; the index builder backfills it from the
    /// enclosing storage subdirectory name.
    #[serde(rename = "projectID", default)]
    pub project_id: Option<String>,
    pub time: SessionTime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SessionTime {
    /// Epoch milliseconds
    pub created: i64,
    /// Epoch milliseconds, always >= created
    pub updated: i64,
}

impl Session {
    pub fn is_global(&self) -> bool {
        self.project_id.as_deref() == Some(GLOBAL_PROJECT)
    }

    /// Display label for the session scope: `[global]` or `[<directory>]`
    pub fn scope_label(&self) -> String {
        if self.is_global() {
            format!("[{}]", GLOBAL_PROJECT)
        } else {
            format!("[{}]", self.directory)
        }
    }
}
