use is_terminal::IsTerminal;

/// Fidelity profile for part rendering. Always passed explicitly; nothing in
/// the presentation layer consults ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Terse scanning profile: reasoning suppressed, long text truncated,
    /// tool calls collapsed to one line
    Compact,
    /// Deep-inspection profile: every variant renders (tool outputs stay
    /// withheld by policy)
    Full,
}

#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub enable_color: bool,
}

impl DisplayOptions {
    /// Color on only when stdout is a terminal, so piped output stays plain
    pub fn detect() -> Self {
        Self {
            enable_color: std::io::stdout().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self {
            enable_color: false,
        }
    }
}
