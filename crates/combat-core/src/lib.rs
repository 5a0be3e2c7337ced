//! Deterministic combat rules shared by the runtime and offline tools.
//!
//! `combat-core` defines the canonical combat rules (stat model, entities,
//! action queue, intent selection, turn resolver, narration) and exposes pure
//! APIs only: no I/O, no clocks, no ambient randomness. All state mutation
//! flows through [`resolver::resolve_turn`] / [`resolver::resolve_flee`],
//! and the runtime persists whatever they return.

pub mod entity;
pub mod env;
pub mod ids;
pub mod intent;
pub mod log;
pub mod narrative;
pub mod queue;
pub mod resolver;
pub mod session;
pub mod stats;

pub use entity::{CombatEntity, CombatantId, EffectKind, ResourceMeter, Side, StatusEffect};
pub use env::{
    CombatEnv, DamageType, MonsterOracle, MonsterSkillAssignment, MonsterSkillTemplate,
    MonsterTemplate, NarrativeSet, Pcg32, RngSource, SequenceSource, SkillOracle, SkillTemplate,
    StatusApplication,
};
pub use ids::{AreaId, MonsterId, MonsterSkillId, PlayerId, SessionId, SkillId};
pub use intent::{EnemyIntent, select_intent};
pub use log::{Actor, LogEntry, LogLine};
pub use queue::{PlayerQueue, QUEUE_CAP, QueueError, QueuedAction};
pub use resolver::{FleeOutcome, ResolveError, Rewards, TurnOutcome, resolve_flee, resolve_turn};
pub use session::{SessionState, SessionStatus};
pub use stats::{BaseAttributes, DerivedStats};
