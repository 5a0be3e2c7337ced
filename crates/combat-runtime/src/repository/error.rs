use combat_core::SessionId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Failures surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock poisoned")]
    LockPoisoned,

    #[error("storage I/O failed")]
    Io(#[from] std::io::Error),

    #[error("record (de)serialization failed")]
    Serde(#[from] serde_json::Error),

    #[error("combat log already holds an entry for {session} turn {turn}")]
    DuplicateLogEntry { session: SessionId, turn: u32 },
}
