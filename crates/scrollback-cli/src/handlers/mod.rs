pub mod list;
pub mod show;

use scrollback_store::SkippedRecord;

/// Skipped malformed records go to stderr so stdout stays pipeable
pub(crate) fn warn_skipped(skipped: &[SkippedRecord]) {
    for record in skipped {
        eprintln!("Warning: skipped {}", record.reason);
    }
}
