//! Turn resolver: the combat state machine.
//!
//! One call to [`resolve_turn`] advances a session by exactly one turn,
//! player phase first, then monster phase, then outcome resolution. The
//! resolver is a pure function of `(state, queue, intent, random draws)`:
//! it owns no persistence and no ambient randomness, which is what lets a
//! turn be replayed deterministically under test.

mod flee;
mod monster;
mod player;

pub use flee::{FleeOutcome, resolve_flee};

use std::collections::BTreeMap;

use crate::entity::CombatEntity;
use crate::env::{CombatEnv, RngSource};
use crate::ids::{SessionId, SkillId};
use crate::intent::EnemyIntent;
use crate::log::{Actor, LineBuffer, LogEntry};
use crate::narrative;
use crate::queue::PlayerQueue;
use crate::session::{SessionState, SessionStatus};

/// XP and currency granted when a session resolves to `Won`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub xp: u64,
    pub col: u64,
}

/// Everything one resolution step produced.
///
/// The caller persists `session` (and applies `rewards`/`skill_uses` to the
/// player record); the resolver itself has no side effects.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnOutcome {
    pub session: SessionState,
    pub entry: LogEntry,
    /// How many times each skill actually executed this turn.
    pub skill_uses: BTreeMap<SkillId, u32>,
    pub rewards: Option<Rewards>,
}

/// Errors detected before any mutation of the session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("{id} is not active (status: {status}); terminal sessions do not resolve")]
    SessionNotActive {
        id: SessionId,
        status: SessionStatus,
    },
}

/// Resolve one combat turn.
///
/// Phase A executes the player's queued actions in submission order
/// (fail-fast on insufficient AP), Phase B executes the monster's intent if
/// the monster survived, and the outcome step settles the status transition.
/// The turn counter increments regardless of outcome.
pub fn resolve_turn(
    mut session: SessionState,
    player: &CombatEntity,
    monster: &CombatEntity,
    queue: &PlayerQueue,
    intent: &EnemyIntent,
    env: &CombatEnv<'_>,
    rng: &mut dyn RngSource,
) -> Result<TurnOutcome, ResolveError> {
    if !session.status.is_active() {
        return Err(ResolveError::SessionNotActive {
            id: session.id,
            status: session.status,
        });
    }

    let mut lines = LineBuffer::new();
    let mut skill_uses = BTreeMap::new();

    player::run_phase(&mut session, monster, queue, env, rng, &mut lines, &mut skill_uses);

    if !session.monster_hp.is_empty() && !intent.is_empty() {
        monster::run_phase(&mut session, player, monster, intent, env, rng, &mut lines);
    }

    let rewards = settle(&mut session, env, &mut lines);

    let resolved_turn = session.turn;
    session.turn += 1;

    Ok(TurnOutcome {
        session,
        entry: lines.into_entry(resolved_turn),
        skill_uses,
        rewards,
    })
}

/// Settle the status transition after both phases.
fn settle(
    session: &mut SessionState,
    env: &CombatEnv<'_>,
    lines: &mut LineBuffer,
) -> Option<Rewards> {
    if session.monster_hp.is_empty() {
        session.status = SessionStatus::Won;
        let rewards = env
            .monsters
            .monster(session.monster_id)
            .map(|template| Rewards {
                xp: template.xp_reward,
                col: template.col_reward,
            })
            .unwrap_or(Rewards { xp: 0, col: 0 });
        lines.push(
            Actor::System,
            "victory",
            "",
            true,
            narrative::victory(rewards.xp, rewards.col),
            None,
        );
        return Some(rewards);
    }

    if session.player_hp.is_empty() {
        session.status = SessionStatus::Lost;
    }

    None
}

#[cfg(test)]
mod tests;
