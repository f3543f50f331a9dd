//! Read-only access to the session store written by the external runner.
//!
//! Layout, rooted at a configurable base path:
//!
//! ```text
//! <root>/session/<projectID>/<sessionID>.json
//! <root>/message/<sessionID>/<messageID>.json
//! <root>/part/<messageID>/<partID>.json
//! ```
//!
//! Nothing in this crate ever writes back to storage.

pub mod index;
pub mod loader;
pub mod transcript;

pub use index::{SessionIndex, SkippedRecord};
pub use loader::Store;
pub use transcript::{Transcript, TranscriptEntry};
