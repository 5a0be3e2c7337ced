//! Flee: a bounded alternative transition out of `Active`.

use crate::entity::CombatEntity;
use crate::env::RngSource;
use crate::log::{Actor, LineBuffer, LogEntry};
use crate::narrative;
use crate::session::{SessionState, SessionStatus};

use super::ResolveError;

/// Result of a flee attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct FleeOutcome {
    pub session: SessionState,
    pub entry: LogEntry,
    pub fled: bool,
}

/// Resolve a flee attempt.
///
/// `chance = clamp(50 + (player.AGI − monster.evasion), 10, 90)`; a roll
/// below the chance escapes with no damage. On failure the monster lands one
/// free, always-hit attack (`max(1, attack − floor(VIT × 0.5))`); if that
/// drops the player, the session is lost, otherwise it stays active and the
/// turn counter still increments.
pub fn resolve_flee(
    mut session: SessionState,
    player: &CombatEntity,
    monster: &CombatEntity,
    rng: &mut dyn RngSource,
) -> Result<FleeOutcome, ResolveError> {
    if !session.status.is_active() {
        return Err(ResolveError::SessionNotActive {
            id: session.id,
            status: session.status,
        });
    }

    let resolved_turn = session.turn;
    let mut lines = LineBuffer::new();

    let chance =
        (50.0 + f64::from(player.attributes.agility) - monster.evasion).clamp(10.0, 90.0);
    let roll = rng.roll_percent();

    if roll < chance {
        session.status = SessionStatus::Fled;
        lines.push(
            Actor::System,
            "flee",
            monster.name.clone(),
            true,
            narrative::flee_success(),
            None,
        );
        return Ok(FleeOutcome {
            session,
            entry: lines.into_entry(resolved_turn),
            fled: true,
        });
    }

    let reduction = player.attributes.vitality / 2;
    let damage = monster.attack.saturating_sub(reduction).max(1);
    session.player_hp.deduct(damage);
    lines.push(
        Actor::Monster,
        "pursuit",
        player.name.clone(),
        true,
        narrative::flee_failure(&monster.name, damage),
        Some(damage),
    );

    if session.player_hp.is_empty() {
        session.status = SessionStatus::Lost;
        lines.push(
            Actor::System,
            "defeat",
            player.name.clone(),
            true,
            narrative::player_defeated(&player.name),
            None,
        );
    }

    session.turn += 1;

    Ok(FleeOutcome {
        session,
        entry: lines.into_entry(resolved_turn),
        fled: false,
    })
}
