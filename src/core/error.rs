use thiserror::Error;

/// Kind of document a record came from, used to label validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    User,
    Garment,
    Outfit,
    Usage,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::User => "user",
            RecordKind::Garment => "garment",
            RecordKind::Outfit => "outfit",
            RecordKind::Usage => "usage",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WardrobeError {
    #[error("Invalid {kind} record '{id}': {reason}")]
    InvalidRecord {
        kind: RecordKind,
        id: String,
        reason: String,
    },

    #[error("Invalid month index {0} (expected 0..=11)")]
    InvalidMonth(u32),

    #[error("{kind} '{id}' not found")]
    NotFound { kind: RecordKind, id: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl WardrobeError {
    pub fn invalid_record(kind: RecordKind, id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            kind,
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Identifier of the offending record, if the error concerns one.
    pub fn record_id(&self) -> Option<&str> {
        match self {
            Self::InvalidRecord { id, .. } | Self::NotFound { id, .. } => Some(id),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WardrobeError>;

impl From<serde_json::Error> for WardrobeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
