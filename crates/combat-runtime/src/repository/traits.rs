use combat_core::{LogEntry, PlayerId, SessionId, SessionState};

use crate::player::PlayerRecord;
use crate::repository::Result;

/// Persistence for combat sessions.
///
/// `find_active` backs the one-active-session-per-player invariant: the
/// service refuses to start a session while one exists.
pub trait SessionRepository: Send + Sync {
    /// Insert or overwrite the session keyed by its id.
    fn save(&self, session: &SessionState) -> Result<()>;

    fn load(&self, id: SessionId) -> Result<Option<SessionState>>;

    /// The player's `active` session, if any. Terminal sessions are history
    /// and never returned here.
    fn find_active(&self, player: PlayerId) -> Result<Option<SessionState>>;

    fn delete(&self, id: SessionId) -> Result<()>;
}

/// Persistence for player records.
pub trait PlayerRepository: Send + Sync {
    fn save(&self, player: &PlayerRecord) -> Result<()>;

    fn load(&self, id: PlayerId) -> Result<Option<PlayerRecord>>;
}

/// Append-only persistence for per-turn combat log entries.
///
/// Entries are keyed `(session, turn)` and never mutated after creation;
/// appending a duplicate key is a repository error.
pub trait CombatLogRepository: Send + Sync {
    fn append(&self, session: SessionId, entry: &LogEntry) -> Result<()>;

    /// All entries for a session in turn order.
    fn entries(&self, session: SessionId) -> Result<Vec<LogEntry>>;
}
