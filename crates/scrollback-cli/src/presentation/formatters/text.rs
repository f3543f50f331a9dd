/// Truncate to at most `max_chars` characters, appending an ellipsis marker
/// when anything was cut. Counts chars, not bytes: part text is user-written
/// and frequently multi-byte.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars).collect();
        format!("{}...", kept)
    }
}
