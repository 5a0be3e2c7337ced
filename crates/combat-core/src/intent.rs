//! Monster intent selection.
//!
//! Before the player declares a turn, the monster publishes what it will do.
//! Selection is deliberately simple: take the first attack pattern and keep
//! the first couple of ids that actually resolve against the monster's
//! assigned skill set; only a monster with no patterns at all falls back to
//! its first assigned skill.

use crate::env::MonsterTemplate;
use crate::ids::MonsterSkillId;

/// Maximum number of actions a monster takes per turn.
const INTENT_CAP: usize = 2;

/// The monster's precomputed action queue for the next turn.
///
/// Shown to the player before they act; an empty intent means the monster
/// phase does nothing.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyIntent {
    pub skills: Vec<MonsterSkillId>,
}

impl EnemyIntent {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

/// Select the monster's intent for the upcoming turn.
///
/// - With a non-empty `attack_patterns` table and assigned skills: pattern
///   index 0, first `min(2, len)` ids that match an assignment. Unmatched
///   ids are silently skipped, so a fully unmatched pattern yields an empty
///   intent.
/// - No patterns but at least one assigned skill: singleton of the first
///   assignment.
/// - No skills at all: empty intent.
pub fn select_intent(template: &MonsterTemplate) -> EnemyIntent {
    if template.skills.is_empty() {
        return EnemyIntent::empty();
    }

    if let Some(pattern) = template.attack_patterns.first() {
        let skills: Vec<MonsterSkillId> = pattern
            .iter()
            .copied()
            .filter(|id| template.assignment(*id).is_some())
            .take(INTENT_CAP)
            .collect();
        return EnemyIntent { skills };
    }

    EnemyIntent {
        skills: vec![template.skills[0].skill],
    }
}
