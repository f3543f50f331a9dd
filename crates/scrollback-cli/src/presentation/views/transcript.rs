//! Transcript printing: drives the part formatter over an assembled session
//! or a single message and produces the final display lines.

use scrollback_store::Transcript;
use scrollback_types::{format_local, Message, PartPayload, Role};

use crate::presentation::formatters::palette::{bold, cyan, yellow};
use crate::presentation::formatters::part::format_part;
use crate::presentation::{DisplayOptions, RenderMode};

const RULE_WIDTH: usize = 80;

/// Render a whole session. User messages always show their text in full
/// regardless of `mode`; assistant parts go through the part formatter under
/// the requested mode.
pub fn format_transcript(
    session_id: &str,
    title: Option<&str>,
    transcript: &Transcript,
    mode: RenderMode,
    opts: &DisplayOptions,
) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(String::new());
    let banner = match title {
        Some(title) if !title.is_empty() => format!("Session: {} - {}", session_id, title),
        _ => format!("Session: {}", session_id),
    };
    lines.push(bold(&banner, opts));
    lines.push(String::new());

    if transcript.is_empty() {
        lines.push("No messages found.".to_string());
        return lines;
    }

    for entry in &transcript.entries {
        lines.push("\u{2500}".repeat(RULE_WIDTH));
        lines.extend(format_message_header(&entry.message, opts));
        lines.push(String::new());

        match entry.message.role {
            // User intent is never truncated
            Role::User => {
                for part in &entry.parts {
                    if let PartPayload::Text(text) = &part.payload {
                        if !text.ignored {
                            lines.extend(text.text.lines().map(String::from));
                            lines.push(String::new());
                        }
                    }
                }
            }
            Role::Assistant => {
                for part in &entry.parts {
                    let rendered = format_part(part, mode, opts);
                    if !rendered.is_empty() {
                        lines.extend(rendered);
                        lines.push(String::new());
                    }
                }
            }
        }
    }

    lines
}

/// Render one message in full detail, ignoring the session-wide mode:
/// explicit inspection overrides brevity.
pub fn format_message_detail(
    session_id: &str,
    message_id: &str,
    transcript: &Transcript,
    opts: &DisplayOptions,
) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(String::new());
    lines.push(bold(&format!("Message: {}", message_id), opts));
    lines.push(String::new());

    let Some(entry) = transcript.find_entry(message_id) else {
        lines.push(format!(
            "Message {} not found in session {}",
            message_id, session_id
        ));
        return lines;
    };

    lines.push("\u{2500}".repeat(RULE_WIDTH));
    lines.extend(format_message_header(&entry.message, opts));
    lines.push(String::new());
    lines.push(format!("{}:", bold("ALL PARTS (FULL MODE)", opts)));
    lines.push(String::new());

    for part in &entry.parts {
        let rendered = format_part(part, RenderMode::Full, opts);
        if !rendered.is_empty() {
            lines.extend(rendered);
            lines.push(String::new());
        }
    }

    lines
}

fn format_message_header(message: &Message, opts: &DisplayOptions) -> Vec<String> {
    let (icon, role_label) = match message.role {
        Role::User => ("\u{1f464}", cyan(&bold("USER", opts), opts)),
        Role::Assistant => ("\u{1f916}", yellow(&bold("ASSISTANT", opts), opts)),
    };

    let mut lines = vec![format!("{} {} - {}", icon, role_label, message.id)];

    if let Some(agent) = &message.agent {
        lines.push(format!("   Agent: {}", agent));
    }
    if let Some(model) = &message.model {
        lines.push(format!("   Model: {}/{}", model.provider_id, model.model_id));
    }

    let mut time_line = format!("   Time: {}", format_local(message.time.created));
    if let Some(completed) = message.time.completed {
        time_line.push_str(&format!(" \u{2192} {}", format_local(completed)));
    }
    lines.push(time_line);

    lines
}
