//! Synthetic storage trees for tests.
//!
//! The runner's on-disk layout is three parallel record hierarchies:
//!
//! ```text
//! <root>/session/<projectID>/<sessionID>.json
//! <root>/message/<sessionID>/<messageID>.json
//! <root>/part/<messageID>/<partID>.json
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde_json::{json, Value};
use tempfile::TempDir;

/// Builds a storage root in a temp directory, one record file at a time.
pub struct StorageFixture {
    dir: TempDir,
}

impl Default for StorageFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create fixture temp dir"),
        }
    }

    /// Storage root to pass as `--storage-root`
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a session record with sensible defaults.
    pub fn add_session(
        &self,
        project_id: &str,
        session_id: &str,
        title: &str,
        created: i64,
        updated: i64,
    ) -> Result<&Self> {
        self.write_session_value(
            project_id,
            session_id,
            &json!({
                "id": session_id,
                "title": title,
                "directory": format!("/home/user/{}", project_id),
                "projectID": project_id,
                "time": {"created": created, "updated": updated},
            }),
        )
    }

    /// Write a session record omitting its `projectID` field (the index
    /// builder must backfill it from the directory name).
    pub fn add_session_without_project_id(
        &self,
        project_dir: &str,
        session_id: &str,
        title: &str,
        created: i64,
        updated: i64,
    ) -> Result<&Self> {
        self.write_session_value(
            project_dir,
            session_id,
            &json!({
                "id": session_id,
                "title": title,
                "directory": format!("/home/user/{}", project_dir),
                "time": {"created": created, "updated": updated},
            }),
        )
    }

    /// Write an arbitrary session record value (escape hatch for odd shapes)
    pub fn write_session_value(
        &self,
        project_dir: &str,
        session_id: &str,
        value: &Value,
    ) -> Result<&Self> {
        let path = self.session_path(project_dir, session_id);
        write_json(&path, value)?;
        Ok(self)
    }

    /// Write raw bytes as a session record (for malformed-record tests)
    pub fn write_session_raw(
        &self,
        project_dir: &str,
        session_id: &str,
        content: &str,
    ) -> Result<&Self> {
        let path = self.session_path(project_dir, session_id);
        ensure_parent(&path)?;
        fs::write(&path, content)?;
        Ok(self)
    }

    /// Write a message record.
    pub fn add_message(
        &self,
        session_id: &str,
        message_id: &str,
        role: &str,
        created: i64,
    ) -> Result<&Self> {
        self.write_message_value(
            session_id,
            message_id,
            &json!({
                "id": message_id,
                "role": role,
                "time": {"created": created},
            }),
        )
    }

    pub fn write_message_value(
        &self,
        session_id: &str,
        message_id: &str,
        value: &Value,
    ) -> Result<&Self> {
        let path = self
            .root()
            .join("message")
            .join(session_id)
            .join(format!("{}.json", message_id));
        write_json(&path, value)?;
        Ok(self)
    }

    pub fn write_message_raw(
        &self,
        session_id: &str,
        message_id: &str,
        content: &str,
    ) -> Result<&Self> {
        let path = self
            .root()
            .join("message")
            .join(session_id)
            .join(format!("{}.json", message_id));
        ensure_parent(&path)?;
        fs::write(&path, content)?;
        Ok(self)
    }

    /// Write a text part record.
    pub fn add_text_part(&self, message_id: &str, part_id: &str, text: &str) -> Result<&Self> {
        self.write_part_value(
            message_id,
            part_id,
            &json!({"id": part_id, "type": "text", "text": text}),
        )
    }

    /// Write a completed tool-call part record with an input map and a large
    /// output blob (which must never surface in rendered output).
    pub fn add_tool_part(
        &self,
        message_id: &str,
        part_id: &str,
        tool: &str,
        status: &str,
        input: Value,
    ) -> Result<&Self> {
        self.write_part_value(
            message_id,
            part_id,
            &json!({
                "id": part_id,
                "type": "tool",
                "tool": tool,
                "callID": format!("call_{}", part_id),
                "state": {
                    "status": status,
                    "input": input,
                    "output": "SECRET_OUTPUT_PAYLOAD".repeat(64),
                },
            }),
        )
    }

    pub fn write_part_value(&self, message_id: &str, part_id: &str, value: &Value) -> Result<&Self> {
        let path = self
            .root()
            .join("part")
            .join(message_id)
            .join(format!("{}.json", part_id));
        write_json(&path, value)?;
        Ok(self)
    }

    pub fn write_part_raw(&self, message_id: &str, part_id: &str, content: &str) -> Result<&Self> {
        let path = self
            .root()
            .join("part")
            .join(message_id)
            .join(format!("{}.json", part_id));
        ensure_parent(&path)?;
        fs::write(&path, content)?;
        Ok(self)
    }

    fn session_path(&self, project_dir: &str, session_id: &str) -> PathBuf {
        self.root()
            .join("session")
            .join(project_dir)
            .join(format!("{}.json", session_id))
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn write_json(path: &Path, value: &Value) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}
