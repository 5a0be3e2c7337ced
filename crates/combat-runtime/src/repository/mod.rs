//! Repository contracts for the mutable combat state.
//!
//! The engine core is persistence-free; these traits are the seam the
//! service mutates state through. Two implementations ship: in-memory
//! (tests, local runs) and JSON-file-backed (simple durable storage).

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileLogRepo, FilePlayerRepo, FileSessionRepo};
pub use memory::{InMemoryLogRepo, InMemoryPlayerRepo, InMemorySessionRepo};
pub use traits::{CombatLogRepository, PlayerRepository, SessionRepository};
