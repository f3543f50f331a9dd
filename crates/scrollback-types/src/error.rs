use std::fmt;
use std::path::PathBuf;

/// Result type for scrollback operations
pub type Result<T> = std::result::Result<T, Error>;

/// Kind of record addressed by an identifier lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Session,
    Message,
    Part,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Session => write!(f, "session"),
            RecordKind::Message => write!(f, "message"),
            RecordKind::Part => write!(f, "part"),
        }
    }
}

/// Error types that can occur while reading the session store
#[derive(Debug)]
pub enum Error {
    /// The storage root (or a required directory under it) cannot be enumerated.
    /// Distinct from an empty listing: a missing root is reported, not treated
    /// as zero sessions.
    StorageUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A record file exists but does not parse as its expected shape
    MalformedRecord {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// An explicitly addressed identifier has no backing record
    NotFound { kind: RecordKind, id: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::StorageUnavailable { path, source } => {
                write!(f, "storage unavailable at {}: {}", path.display(), source)
            }
            Error::MalformedRecord { path, source } => {
                write!(f, "malformed record {}: {}", path.display(), source)
            }
            Error::NotFound { kind, id } => write!(f, "{} not found: {}", kind, id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::StorageUnavailable { source, .. } => Some(source),
            Error::MalformedRecord { source, .. } => Some(source),
            Error::NotFound { .. } => None,
        }
    }
}
