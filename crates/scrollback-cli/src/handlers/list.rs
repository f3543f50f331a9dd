use anyhow::{Context, Result};
use scrollback_store::Store;

use crate::handlers::warn_skipped;
use crate::presentation::formatters::session_list::format_session_list;
use crate::presentation::DisplayOptions;

pub fn handle(store: &Store, opts: &DisplayOptions) -> Result<()> {
    let index = store
        .session_index()
        .with_context(|| format!("failed to list sessions under {}", store.root().display()))?;

    warn_skipped(&index.skipped);

    for line in format_session_list(&index, opts) {
        println!("{}", line);
    }

    Ok(())
}
