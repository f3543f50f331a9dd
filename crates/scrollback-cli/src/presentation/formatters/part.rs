//! Part rendering: one tagged variant in, display lines out.
//!
//! `format_part` is a pure function of (part, mode, options). Both modes
//! withhold tool outputs entirely; that is an information-hiding contract,
//! not an omission (outputs may be arbitrarily large and are not even kept
//! in the typed model).

use scrollback_types::{
    Part, PartPayload, StepFinishPart, SubtaskPart, TokenUsage, ToolPart, ToolStatus,
};

use crate::presentation::formatters::palette::{blue, cyan, gray, green, magenta, yellow};
use crate::presentation::formatters::text::truncate_chars;
use crate::presentation::{DisplayOptions, RenderMode};

/// Compact mode keeps at most this many leading lines of a text body
const COMPACT_TEXT_LINES: usize = 5;
/// Compact bash lines preview at most this many characters of the command
const BASH_PREVIEW_CHARS: usize = 100;
/// Full-mode tool input preview budget (pretty-printed JSON)
const INPUT_PREVIEW_CHARS: usize = 200;
/// Full-mode subtask prompt preview budget
const SUBTASK_PROMPT_CHARS: usize = 100;

/// Render one part under the given fidelity mode.
///
/// Exhaustive over the closed tag set, with the `Unknown` arm guaranteeing
/// that rendering never fails on a future tag.
pub fn format_part(part: &Part, mode: RenderMode, opts: &DisplayOptions) -> Vec<String> {
    match mode {
        RenderMode::Compact => format_compact(part, opts),
        RenderMode::Full => format_full(part, opts),
    }
}

fn format_compact(part: &Part, opts: &DisplayOptions) -> Vec<String> {
    match &part.payload {
        PartPayload::Text(text) => {
            if text.ignored {
                return Vec::new();
            }
            let body: Vec<&str> = text.text.lines().collect();
            if body.len() > COMPACT_TEXT_LINES {
                let mut lines: Vec<String> = body[..COMPACT_TEXT_LINES]
                    .iter()
                    .map(|line| gray(line, opts))
                    .collect();
                lines.push(gray(
                    &format!("... ({} more lines)", body.len() - COMPACT_TEXT_LINES),
                    opts,
                ));
                lines
            } else {
                body.iter().map(|line| gray(line, opts)).collect()
            }
        }

        PartPayload::Tool(tool) => vec![format_tool_compact(tool, opts)],

        // Quick scanning: thinking is noise here
        PartPayload::Reasoning(_) => Vec::new(),

        PartPayload::File(file) => match &file.filename {
            Some(filename) => vec![format!(
                "{} : {}",
                green("file", opts),
                cyan(filename, opts)
            )],
            None => Vec::new(),
        },

        PartPayload::StepStart(_) => vec![magenta("\u{2500} step start \u{2500}", opts)],

        PartPayload::StepFinish(finish) => match &finish.reason {
            Some(reason) => vec![magenta(
                &format!("\u{2500} step finish : {}", reason),
                opts,
            )],
            None => vec![magenta("\u{2500} step finish \u{2500}", opts)],
        },

        // Everything else is bookkeeping noise at a glance
        PartPayload::Patch(_)
        | PartPayload::Compaction(_)
        | PartPayload::Retry(_)
        | PartPayload::Agent(_)
        | PartPayload::Subtask(_)
        | PartPayload::Snapshot(_) => Vec::new(),

        // Unrecognized tags surface in both modes: suppressing content this
        // build cannot classify would hide it entirely
        PartPayload::Unknown { tag, raw } => format_unknown(tag, raw, opts),
    }
}

fn format_unknown(tag: &str, raw: &serde_json::Value, opts: &DisplayOptions) -> Vec<String> {
    let mut lines = vec![gray(&format!("\u{2500} {} \u{2500}", tag), opts)];
    let pretty = serde_json::to_string_pretty(raw).unwrap_or_else(|_| raw.to_string());
    lines.extend(pretty.lines().map(String::from));
    lines
}

/// One-line phrasing for a tool call. Recognized tools (shell execution,
/// read, write, edit) get specialized wording; anything else falls back to
/// `NAME : firstInputValue`, or the bare name on an empty input map.
fn format_tool_compact(tool: &ToolPart, opts: &DisplayOptions) -> String {
    let label = blue("tool call", opts);
    let state = tool.state.as_ref();
    let first_value = state.and_then(|s| s.first_input_value());

    if tool.tool == "bash" {
        let command = state
            .and_then(|s| {
                s.input
                    .get("command")
                    .or_else(|| s.input.get("script"))
                    .and_then(|v| v.as_str())
            })
            .unwrap_or_default();
        return format!(
            "{} : BASH : {}",
            label,
            cyan(&truncate_chars(command, BASH_PREVIEW_CHARS), opts)
        );
    }

    if tool.tool == "editor" {
        if let Some(file) = state.and_then(|s| s.input.get("file")).and_then(|v| v.as_str()) {
            let op = state
                .and_then(|s| s.input.get("operation"))
                .and_then(|v| v.as_str())
                .unwrap_or("edit");
            return format!("{} : {} : {}", label, op.to_uppercase(), cyan(file, opts));
        }
    }

    match (tool.tool.as_str(), first_value) {
        ("read", Some(value)) => format!("{} : READ : {}", label, cyan(&value, opts)),
        ("write", Some(value)) => format!("{} : WRITE : {}", label, cyan(&value, opts)),
        (name, Some(value)) => {
            format!("{} : {} : {}", label, name.to_uppercase(), cyan(&value, opts))
        }
        (name, None) => format!("{} : {}", label, name.to_uppercase()),
    }
}

fn format_full(part: &Part, opts: &DisplayOptions) -> Vec<String> {
    match &part.payload {
        PartPayload::Text(text) => {
            if text.ignored {
                return Vec::new();
            }
            let mut lines = vec![gray("\u{2500} text \u{2500}", opts)];
            lines.extend(text.text.lines().map(String::from));
            lines
        }

        PartPayload::Tool(tool) => format_tool_full(tool, opts),

        PartPayload::Reasoning(reasoning) => {
            let mut lines = vec![magenta("\u{2500} reasoning \u{2500}", opts)];
            lines.extend(reasoning.text.lines().map(String::from));
            lines
        }

        PartPayload::File(file) => {
            let mut lines = vec![green("\u{2500} file \u{2500}", opts)];
            lines.push(format!("   MIME: {}", file.mime));
            if let Some(filename) = &file.filename {
                lines.push(format!("   Filename: {}", filename));
            }
            if let Some(url) = &file.url {
                lines.push(format!("   URL: {}", url));
            }
            lines
        }

        PartPayload::StepStart(start) => vec![
            cyan("\u{2500} step start \u{2500}", opts),
            format!(
                "   Snapshot: {}",
                if start.snapshot.is_some() { "yes" } else { "no" }
            ),
        ],

        PartPayload::StepFinish(finish) => format_step_finish_full(finish, opts),

        PartPayload::Patch(patch) => {
            let mut lines = vec![green("\u{2500} patch \u{2500}", opts)];
            lines.push(format!("   Hash: {}", patch.hash));
            lines.push(format!("   Files ({}):", patch.files.len()));
            for file in &patch.files {
                lines.push(format!("     - {}", file));
            }
            lines
        }

        PartPayload::Compaction(compaction) => {
            let mut lines = vec![magenta("\u{2500} compaction \u{2500}", opts)];
            if let Some(auto) = compaction.auto {
                lines.push(format!("   Auto: {}", auto));
            }
            lines
        }

        PartPayload::Retry(retry) => {
            let mut lines = vec![yellow("\u{2500} retry \u{2500}", opts)];
            lines.push(format!("   Attempt: {}", retry.attempt));
            if let Some(error) = &retry.error {
                lines.push(format!("   Error: {}", error));
            }
            lines
        }

        PartPayload::Agent(agent) => {
            let mut lines = vec![cyan("\u{2500} agent \u{2500}", opts)];
            lines.push(format!("   Name: {}", agent.name));
            if let Some(source) = &agent.source {
                lines.push(format!("   Source: {}", source));
            }
            lines
        }

        PartPayload::Subtask(subtask) => format_subtask_full(subtask, opts),

        PartPayload::Snapshot(_) => vec![
            cyan("\u{2500} snapshot \u{2500}", opts),
            format!("   {}", gray("(snapshot data omitted)", opts)),
        ],

        // Forward compatibility: a tag this build has never heard of still
        // renders, header plus the whole payload, no truncation.
        PartPayload::Unknown { tag, raw } => format_unknown(tag, raw, opts),
    }
}

fn format_tool_full(tool: &ToolPart, opts: &DisplayOptions) -> Vec<String> {
    let status = tool
        .state
        .as_ref()
        .map(|s| s.status)
        .unwrap_or(ToolStatus::Running);

    let icon = match status {
        ToolStatus::Completed => "\u{2705}",
        ToolStatus::Error => "\u{274c}",
        _ => "\u{23f3}",
    };

    let mut lines = vec![format!(
        "{} {} {}",
        blue("\u{2500} tool call \u{2500}", opts),
        icon,
        tool.tool
    )];

    if let Some(call_id) = &tool.call_id {
        lines.push(format!("   Call ID: {}", call_id));
    }

    if let Some(state) = &tool.state {
        if !state.input.is_empty() {
            let pretty = serde_json::to_string_pretty(&state.input)
                .unwrap_or_else(|_| "{}".to_string());
            let preview = truncate_chars(&pretty, INPUT_PREVIEW_CHARS);
            for (i, line) in preview.lines().enumerate() {
                if i == 0 {
                    lines.push(format!("   Input: {}", line));
                } else {
                    lines.push(format!("   {}", line));
                }
            }
        }

        match state.status {
            ToolStatus::Completed => {
                lines.push("   Status: completed".to_string());
                if let Some(metadata) = &state.metadata {
                    let pretty = serde_json::to_string_pretty(metadata)
                        .unwrap_or_else(|_| metadata.to_string());
                    for (i, line) in pretty.lines().enumerate() {
                        if i == 0 {
                            lines.push(format!("   Metadata: {}", line));
                        } else {
                            lines.push(format!("   {}", line));
                        }
                    }
                }
                lines.push(format!(
                    "   {}",
                    gray("(full output omitted - too large)", opts)
                ));
            }
            ToolStatus::Error => {
                lines.push("   Status: error".to_string());
                if let Some(error) = &state.error {
                    lines.push(format!("   Error: {}", error));
                }
            }
            other => {
                lines.push(format!("   Status: {}", other.as_str()));
            }
        }
    } else {
        lines.push(format!("   Status: {}", ToolStatus::Running.as_str()));
    }

    lines
}

fn format_step_finish_full(finish: &StepFinishPart, opts: &DisplayOptions) -> Vec<String> {
    let mut lines = vec![cyan("\u{2500} step finish \u{2500}", opts)];
    if let Some(reason) = &finish.reason {
        lines.push(format!("   Reason: {}", reason));
    }
    if let Some(cost) = finish.cost {
        lines.push(format!("   Cost: ${:.4}", cost));
    }
    if let Some(tokens) = &finish.tokens {
        lines.push(format!("   Tokens: {}", format_token_usage(tokens)));
    }
    lines
}

fn format_token_usage(tokens: &TokenUsage) -> String {
    let mut summary = format!(
        "input={} output={} reasoning={}",
        tokens.input, tokens.output, tokens.reasoning
    );
    if let Some(cache) = &tokens.cache {
        summary.push_str(&format!(" cache.read={} cache.write={}", cache.read, cache.write));
    }
    summary
}

fn format_subtask_full(subtask: &SubtaskPart, opts: &DisplayOptions) -> Vec<String> {
    let mut lines = vec![cyan("\u{2500} subtask \u{2500}", opts)];
    lines.push(format!(
        "   Prompt: {}",
        truncate_chars(&subtask.prompt, SUBTASK_PROMPT_CHARS)
    ));
    if let Some(description) = &subtask.description {
        lines.push(format!("   Description: {}", description));
    }
    lines
}
