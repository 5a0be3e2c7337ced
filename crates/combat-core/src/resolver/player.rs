//! Phase A: player actions.

use std::collections::BTreeMap;

use crate::entity::CombatEntity;
use crate::env::{CombatEnv, RngSource};
use crate::ids::SkillId;
use crate::log::{Actor, LineBuffer};
use crate::narrative;
use crate::queue::PlayerQueue;
use crate::session::SessionState;

/// Execute the player's queued actions in submission order.
///
/// Fail-fast rules:
/// - a dangling skill id skips that action silently;
/// - insufficient AP emits one line and drops the rest of the queue;
/// - the monster reaching 0 HP drops the rest of the queue (the monster
///   never gets to act on a turn it dies in).
pub(super) fn run_phase(
    session: &mut SessionState,
    monster: &CombatEntity,
    queue: &PlayerQueue,
    env: &CombatEnv<'_>,
    rng: &mut dyn RngSource,
    lines: &mut LineBuffer,
    skill_uses: &mut BTreeMap<SkillId, u32>,
) {
    for action in queue.iter() {
        let Some(skill) = env.skills.skill(action.skill) else {
            continue;
        };

        if session.player_ap.current < skill.ap_cost {
            lines.push(
                Actor::Player,
                skill.name.clone(),
                monster.name.clone(),
                false,
                narrative::insufficient_energy(&skill.name),
                None,
            );
            break;
        }

        session.player_ap.deduct(skill.ap_cost);
        *skill_uses.entry(skill.id).or_insert(0) += 1;

        let damage = (f64::from(skill.amp) * rng.variance()).floor() as u32;
        session.monster_hp.deduct(damage);

        if let Some(use_line) = &skill.narrative.use_line {
            lines.push(
                Actor::Player,
                skill.name.clone(),
                monster.name.clone(),
                true,
                narrative::fill(use_line, damage),
                None,
            );
        }
        let damage_text = match &skill.narrative.hit {
            Some(template) => narrative::fill(template, damage),
            None => narrative::player_damage(&skill.name, &monster.name, damage),
        };
        lines.push(
            Actor::Player,
            skill.name.clone(),
            monster.name.clone(),
            true,
            damage_text,
            Some(damage),
        );

        if session.monster_hp.is_empty() {
            lines.push(
                Actor::System,
                "defeat",
                monster.name.clone(),
                true,
                narrative::monster_defeated(&monster.name),
                None,
            );
            break;
        }
    }
}
