//! JSON-file-backed repositories.
//!
//! One file per record under a root directory: `session-<id>.json`,
//! `player-<id>.json`, and an append-only `log-<session>.jsonl` with one
//! entry per line. Good enough for a single-writer deployment; anything
//! heavier belongs behind the same traits.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use combat_core::{LogEntry, PlayerId, SessionId, SessionState};

use crate::player::PlayerRecord;
use crate::repository::{
    CombatLogRepository, PlayerRepository, RepositoryError, Result, SessionRepository,
};

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let file = File::open(path)?;
    Ok(Some(serde_json::from_reader(BufReader::new(file))?))
}

/// File-backed session store.
pub struct FileSessionRepo {
    root: PathBuf,
}

impl FileSessionRepo {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path(&self, id: SessionId) -> PathBuf {
        self.root.join(format!("session-{}.json", id.0))
    }
}

impl SessionRepository for FileSessionRepo {
    fn save(&self, session: &SessionState) -> Result<()> {
        write_json(&self.path(session.id), session)
    }

    fn load(&self, id: SessionId) -> Result<Option<SessionState>> {
        read_json(&self.path(id))
    }

    fn find_active(&self, player: PlayerId) -> Result<Option<SessionState>> {
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let is_session_file = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("session-") && n.ends_with(".json"));
            if !is_session_file {
                continue;
            }
            if let Some(session) = read_json::<SessionState>(&path)? {
                if session.player_id == player && session.status.is_active() {
                    return Ok(Some(session));
                }
            }
        }
        Ok(None)
    }

    fn delete(&self, id: SessionId) -> Result<()> {
        let path = self.path(id);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// File-backed player store.
pub struct FilePlayerRepo {
    root: PathBuf,
}

impl FilePlayerRepo {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path(&self, id: PlayerId) -> PathBuf {
        self.root.join(format!("player-{}.json", id.0))
    }
}

impl PlayerRepository for FilePlayerRepo {
    fn save(&self, player: &PlayerRecord) -> Result<()> {
        write_json(&self.path(player.id), player)
    }

    fn load(&self, id: PlayerId) -> Result<Option<PlayerRecord>> {
        read_json(&self.path(id))
    }
}

/// File-backed append-only combat log: one JSON entry per line.
pub struct FileLogRepo {
    root: PathBuf,
}

impl FileLogRepo {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path(&self, session: SessionId) -> PathBuf {
        self.root.join(format!("log-{}.jsonl", session.0))
    }

    fn read_all(&self, session: SessionId) -> Result<Vec<LogEntry>> {
        let path = self.path(session);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(path)?;
        let mut entries = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        Ok(entries)
    }
}

impl CombatLogRepository for FileLogRepo {
    fn append(&self, session: SessionId, entry: &LogEntry) -> Result<()> {
        if self.read_all(session)?.iter().any(|e| e.turn == entry.turn) {
            return Err(RepositoryError::DuplicateLogEntry {
                session,
                turn: entry.turn,
            });
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path(session))?;
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');
        file.write_all(&line)?;
        Ok(())
    }

    fn entries(&self, session: SessionId) -> Result<Vec<LogEntry>> {
        let mut entries = self.read_all(session)?;
        entries.sort_by_key(|e| e.turn);
        Ok(entries)
    }
}
