use scrollback_types::{Error, Message, Part, RecordKind, Result};

use crate::index::SkippedRecord;
use crate::loader::{list_record_files, load_record, Store};

/// Ordered reconstruction of one session: messages by creation time
/// ascending, each with its parts in storage order.
#[derive(Debug, Default)]
pub struct Transcript {
    pub entries: Vec<TranscriptEntry>,
    /// Malformed message/part records skipped while assembling
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Debug)]
pub struct TranscriptEntry {
    pub message: Message,
    pub parts: Vec<Part>,
}

impl Transcript {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find_entry(&self, message_id: &str) -> Option<&TranscriptEntry> {
        self.entries.iter().find(|e| e.message.id == message_id)
    }
}

impl Store {
    /// Assemble the full ordered transcript for one session.
    ///
    /// A session with zero messages (including a missing message directory,
    /// since the runner only creates it on first write) yields an empty
    /// transcript, not an error. Likewise a missing part directory yields
    /// zero parts for that message.
    pub fn assemble(&self, session_id: &str) -> Result<Transcript> {
        let mut transcript = Transcript::default();

        let msg_dir = self.message_dir(session_id);
        if !msg_dir.is_dir() {
            return Ok(transcript);
        }

        let mut messages: Vec<Message> = Vec::new();
        for path in list_record_files(&msg_dir)? {
            match load_record::<Message>(&path, RecordKind::Message) {
                Ok(message) => messages.push(message),
                Err(err @ Error::MalformedRecord { .. }) => {
                    transcript.skipped.push(SkippedRecord::from_error(path, &err));
                }
                Err(err) => return Err(err),
            }
        }

        // Canonical transcript order; stable on creation-time ties
        messages.sort_by_key(|m| m.time.created);

        for message in messages {
            let parts = self.load_parts(&message.id, &mut transcript.skipped)?;
            transcript.entries.push(TranscriptEntry { message, parts });
        }

        Ok(transcript)
    }

    /// Parts for one message, in storage order (no re-sorting beyond the
    /// deterministic file-name enumeration; parts lack an ordering key).
    fn load_parts(&self, message_id: &str, skipped: &mut Vec<SkippedRecord>) -> Result<Vec<Part>> {
        let part_dir = self.part_dir(message_id);
        if !part_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut parts = Vec::new();
        for path in list_record_files(&part_dir)? {
            match load_record::<Part>(&path, RecordKind::Part) {
                Ok(part) => parts.push(part),
                Err(err @ Error::MalformedRecord { .. }) => {
                    skipped.push(SkippedRecord::from_error(path, &err));
                }
                Err(err) => return Err(err),
            }
        }
        Ok(parts)
    }
}
