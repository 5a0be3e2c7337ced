use combat_core::{
    AreaId, EnemyIntent, MonsterId, ResourceMeter, Rewards, SessionId, SessionState, SessionStatus,
};

/// What the player wants to fight: a specific monster, or whatever roams an
/// area (its first monster).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombatTarget {
    Monster(MonsterId),
    Area(AreaId),
}

/// Snapshot returned when a session is opened.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SessionSummary {
    pub session_id: SessionId,
    pub monster_id: MonsterId,
    pub monster_name: String,
    pub turn: u32,
    pub status: SessionStatus,
    pub player_hp: ResourceMeter,
    pub player_ap: ResourceMeter,
    pub monster_hp: ResourceMeter,
    /// The monster's published intent for the first turn.
    pub intent: EnemyIntent,
}

impl SessionSummary {
    pub(super) fn from_session(session: &SessionState, monster_name: &str) -> Self {
        Self {
            session_id: session.id,
            monster_id: session.monster_id,
            monster_name: monster_name.to_string(),
            turn: session.turn,
            status: session.status,
            player_hp: session.player_hp,
            player_ap: session.player_ap,
            monster_hp: session.monster_hp,
            intent: session.enemy_intent.clone(),
        }
    }
}

/// Result of one resolved turn.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TurnResult {
    pub session_id: SessionId,
    /// The session's turn counter after resolution.
    pub turn: u32,
    pub status: SessionStatus,
    pub narration: String,
    pub player_hp: ResourceMeter,
    pub player_ap: ResourceMeter,
    pub monster_hp: ResourceMeter,
    pub rewards: Option<Rewards>,
}

/// Result of a flee attempt.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FleeResult {
    pub session_id: SessionId,
    pub fled: bool,
    pub status: SessionStatus,
    pub narration: String,
    pub player_hp: ResourceMeter,
}
