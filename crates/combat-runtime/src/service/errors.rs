use combat_core::{AreaId, MonsterId, PlayerId, QueueError, SessionId};
use thiserror::Error;

use crate::content::ContentError;
use crate::repository::RepositoryError;

/// Failures surfaced by the combat operations.
///
/// Every variant is detected before any state mutation; a rejected request
/// leaves sessions, players, and logs untouched.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("monster {0} not found")]
    MonsterNotFound(MonsterId),

    #[error("{0} does not exist or holds no monsters")]
    AreaNotFound(AreaId),

    #[error("player {player} is already in combat ({session})")]
    AlreadyInCombat {
        player: PlayerId,
        session: SessionId,
    },

    #[error("invalid action queue: {0}")]
    InvalidQueue(#[from] QueueError),

    #[error("no active session {0}")]
    SessionNotFound(SessionId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Content(#[from] ContentError),
}
