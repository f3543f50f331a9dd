use anyhow::{Context, Result};
use scrollback_store::Store;
use scrollback_types::Error;

use crate::handlers::warn_skipped;
use crate::presentation::views::transcript::{format_message_detail, format_transcript};
use crate::presentation::{DisplayOptions, RenderMode};

pub fn handle_session(
    store: &Store,
    session_id: &str,
    mode: RenderMode,
    opts: &DisplayOptions,
) -> Result<()> {
    // Best-effort banner enrichment: a transcript can outlive its session
    // record, so a missing record downgrades to a plain banner instead of
    // failing the whole print.
    let title = match store.find_session(session_id) {
        Ok(session) => Some(session.title),
        Err(Error::NotFound { .. }) => None,
        Err(err) => return Err(err).context("failed to look up session record"),
    };

    let transcript = store
        .assemble(session_id)
        .with_context(|| format!("failed to assemble session {}", session_id))?;

    warn_skipped(&transcript.skipped);

    for line in format_transcript(session_id, title.as_deref(), &transcript, mode, opts) {
        println!("{}", line);
    }

    Ok(())
}

pub fn handle_message(
    store: &Store,
    session_id: &str,
    message_id: &str,
    opts: &DisplayOptions,
) -> Result<()> {
    let transcript = store
        .assemble(session_id)
        .with_context(|| format!("failed to assemble session {}", session_id))?;

    warn_skipped(&transcript.skipped);

    for line in format_message_detail(session_id, message_id, &transcript, opts) {
        println!("{}", line);
    }

    Ok(())
}
