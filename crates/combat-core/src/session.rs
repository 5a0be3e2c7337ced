//! Persisted combat session state.

use std::collections::BTreeMap;

use crate::entity::{ResourceMeter, StatusEffect};
use crate::ids::{MonsterId, PlayerId, SessionId, SkillId};
use crate::intent::EnemyIntent;

/// Lifecycle status of a session.
///
/// `Active` is the only state that resolves turns; the other three are
/// terminal and one-way. A session transitions out of `Active` exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Won,
    Lost,
    Fled,
}

impl SessionStatus {
    pub fn is_active(self) -> bool {
        matches!(self, SessionStatus::Active)
    }

    pub fn is_terminal(self) -> bool {
        !self.is_active()
    }
}

/// The persisted aggregate for one ongoing battle.
///
/// Mutated only by the resolver (one resolution per turn); the runtime
/// persists whatever the resolver returns. Terminal sessions stop resolving
/// but the record survives as history.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionState {
    pub id: SessionId,
    pub player_id: PlayerId,
    pub monster_id: MonsterId,

    pub player_hp: ResourceMeter,
    pub player_ap: ResourceMeter,
    pub monster_hp: ResourceMeter,

    /// Monotonic turn counter, starting at 1.
    pub turn: u32,
    pub status: SessionStatus,

    /// The monster's precomputed action queue for the next turn.
    pub enemy_intent: EnemyIntent,

    pub player_buffs: Vec<StatusEffect>,
    pub player_debuffs: Vec<StatusEffect>,
    pub monster_buffs: Vec<StatusEffect>,
    pub monster_debuffs: Vec<StatusEffect>,

    /// Remaining cooldown turns per player skill.
    pub skill_cooldowns: BTreeMap<SkillId, u32>,
}

impl SessionState {
    /// Fresh session at turn 1, `Active`, with empty effect sets.
    pub fn new(
        id: SessionId,
        player_id: PlayerId,
        monster_id: MonsterId,
        player_hp: ResourceMeter,
        player_ap: ResourceMeter,
        monster_hp: ResourceMeter,
        enemy_intent: EnemyIntent,
    ) -> Self {
        Self {
            id,
            player_id,
            monster_id,
            player_hp,
            player_ap,
            monster_hp,
            turn: 1,
            status: SessionStatus::Active,
            enemy_intent,
            player_buffs: Vec::new(),
            player_debuffs: Vec::new(),
            monster_buffs: Vec::new(),
            monster_debuffs: Vec::new(),
            skill_cooldowns: BTreeMap::new(),
        }
    }
}
