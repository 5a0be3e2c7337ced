//! In-memory repository implementations for tests and local runs.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use combat_core::{LogEntry, PlayerId, SessionId, SessionState};

use crate::player::PlayerRecord;
use crate::repository::{
    CombatLogRepository, PlayerRepository, RepositoryError, Result, SessionRepository,
};

/// In-memory session store.
#[derive(Default)]
pub struct InMemorySessionRepo {
    sessions: RwLock<HashMap<SessionId, SessionState>>,
}

impl InMemorySessionRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemorySessionRepo {
    fn save(&self, session: &SessionState) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sessions.insert(session.id, session.clone());
        Ok(())
    }

    fn load(&self, id: SessionId) -> Result<Option<SessionState>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(sessions.get(&id).cloned())
    }

    fn find_active(&self, player: PlayerId) -> Result<Option<SessionState>> {
        let sessions = self
            .sessions
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(sessions
            .values()
            .find(|s| s.player_id == player && s.status.is_active())
            .cloned())
    }

    fn delete(&self, id: SessionId) -> Result<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        sessions.remove(&id);
        Ok(())
    }
}

/// In-memory player store.
#[derive(Default)]
pub struct InMemoryPlayerRepo {
    players: RwLock<HashMap<PlayerId, PlayerRecord>>,
}

impl InMemoryPlayerRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a player, returning `self` for builder-style setup in tests.
    pub fn with_player(self, player: PlayerRecord) -> Self {
        self.players
            .write()
            .expect("fresh lock cannot be poisoned")
            .insert(player.id, player);
        self
    }
}

impl PlayerRepository for InMemoryPlayerRepo {
    fn save(&self, player: &PlayerRecord) -> Result<()> {
        let mut players = self
            .players
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        players.insert(player.id, player.clone());
        Ok(())
    }

    fn load(&self, id: PlayerId) -> Result<Option<PlayerRecord>> {
        let players = self
            .players
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(players.get(&id).cloned())
    }
}

/// In-memory append-only combat log.
#[derive(Default)]
pub struct InMemoryLogRepo {
    entries: RwLock<BTreeMap<(SessionId, u32), LogEntry>>,
}

impl InMemoryLogRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CombatLogRepository for InMemoryLogRepo {
    fn append(&self, session: SessionId, entry: &LogEntry) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let key = (session, entry.turn);
        if entries.contains_key(&key) {
            return Err(RepositoryError::DuplicateLogEntry {
                session,
                turn: entry.turn,
            });
        }
        entries.insert(key, entry.clone());
        Ok(())
    }

    fn entries(&self, session: SessionId) -> Result<Vec<LogEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(entries
            .range((session, 0)..=(session, u32::MAX))
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}
