use scrollback_store::SessionIndex;
use scrollback_types::format_local;

use crate::presentation::formatters::palette::cyan;
use crate::presentation::DisplayOptions;

/// One line per session, most recently updated first, with a leading count.
/// The line format is grep-friendly on purpose: id, scope, date, title.
pub fn format_session_list(index: &SessionIndex, opts: &DisplayOptions) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(String::new());
    lines.push(format!("{} sessions:", index.sessions.len()));
    lines.push(String::new());

    for session in &index.sessions {
        lines.push(format!(
            "{} {} {} {}",
            cyan(&session.id, opts),
            session.scope_label(),
            format_local(session.time.updated),
            session.title
        ));
    }

    lines.push(String::new());
    lines
}
