//! Orchestration layer around `combat-core`.
//!
//! The runtime owns everything the pure rules crate refuses to: repositories
//! for sessions, players, and combat logs; content catalogs loaded from RON;
//! a production randomness source; and the three public operations
//! (`start_combat`, `resolve_turn`, `flee`) exposed through
//! [`service::CombatService`].

pub mod content;
pub mod player;
pub mod repository;
pub mod rng;
pub mod service;

pub use content::{AreaRecord, ContentError, MonsterCatalog, SkillCatalog};
pub use player::PlayerRecord;
pub use repository::{
    CombatLogRepository, FileLogRepo, FilePlayerRepo, FileSessionRepo, InMemoryLogRepo,
    InMemoryPlayerRepo, InMemorySessionRepo, PlayerRepository, RepositoryError, SessionRepository,
};
pub use rng::ThreadRngSource;
pub use service::{
    CombatService, CombatTarget, FleeResult, ServiceError, SessionSummary, TurnResult,
};
