//! Phase B: monster actions.

use crate::entity::CombatEntity;
use crate::env::{CombatEnv, RngSource};
use crate::intent::EnemyIntent;
use crate::log::{Actor, LineBuffer};
use crate::narrative;
use crate::session::SessionState;

/// Execute the monster's intent queue in order.
///
/// Hit chance is `effective_accuracy − player.AGI × 0.5`, deliberately
/// unclamped: enough player AGI drives the chance negative and the action
/// can never land. Hit damage is `max(1, effective_damage − floor(VIT × 0.5))`.
pub(super) fn run_phase(
    session: &mut SessionState,
    player: &CombatEntity,
    monster: &CombatEntity,
    intent: &EnemyIntent,
    env: &CombatEnv<'_>,
    rng: &mut dyn RngSource,
    lines: &mut LineBuffer,
) {
    let Some(template) = env.monsters.monster(session.monster_id) else {
        return;
    };

    for id in &intent.skills {
        let Some(assignment) = template.assignment(*id) else {
            continue;
        };
        let Some(skill) = env.monsters.monster_skill(assignment.skill) else {
            continue;
        };

        let accuracy = assignment.accuracy_override.unwrap_or(skill.accuracy);
        let base_damage = assignment.damage_override.unwrap_or(skill.base_damage);

        let hit_chance = f64::from(accuracy) - f64::from(player.attributes.agility) * 0.5;
        let roll = rng.roll_percent();

        if roll < hit_chance {
            let reduction = player.attributes.vitality / 2;
            let damage = base_damage.saturating_sub(reduction).max(1);
            session.player_hp.deduct(damage);

            if let Some(use_line) = &skill.narrative.use_line {
                lines.push(
                    Actor::Monster,
                    skill.name.clone(),
                    player.name.clone(),
                    true,
                    narrative::fill(use_line, damage),
                    None,
                );
            }
            let hit_text = match &skill.narrative.hit {
                Some(template) => narrative::fill(template, damage),
                None => narrative::monster_damage(&monster.name, damage),
            };
            lines.push(
                Actor::Monster,
                skill.name.clone(),
                player.name.clone(),
                true,
                hit_text,
                Some(damage),
            );

            if session.player_hp.is_empty() {
                lines.push(
                    Actor::System,
                    "defeat",
                    player.name.clone(),
                    true,
                    narrative::player_defeated(&player.name),
                    None,
                );
                break;
            }
        } else {
            let miss_text = match &skill.narrative.miss {
                Some(template) => narrative::fill(template, 0),
                None => narrative::monster_miss(&monster.name),
            };
            lines.push(
                Actor::Monster,
                skill.name.clone(),
                player.name.clone(),
                false,
                miss_text,
                None,
            );
        }
    }
}
