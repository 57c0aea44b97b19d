use thiserror::Error;

/// Failures that can occur while loading or parsing the roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The backing file could not be read.
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store exists but holds no content.
    #[error("roster is empty")]
    Empty,

    /// The content is not a JSON array of `{id, name}` records.
    #[error("invalid roster format: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
