use crate::env::NarrativeSet;
use crate::ids::{MonsterId, MonsterSkillId};

/// Immutable template for a monster skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSkillTemplate {
    pub id: MonsterSkillId,
    pub name: String,
    pub base_damage: u32,
    /// Accuracy in percent, before the player's AGI reduction.
    pub accuracy: u32,
    pub narrative: NarrativeSet,
}

/// Binds a monster to one of its skills, optionally overriding the
/// template's accuracy or damage for this monster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterSkillAssignment {
    pub skill: MonsterSkillId,
    pub accuracy_override: Option<u32>,
    pub damage_override: Option<u32>,
}

impl MonsterSkillAssignment {
    pub fn new(skill: MonsterSkillId) -> Self {
        Self {
            skill,
            accuracy_override: None,
            damage_override: None,
        }
    }
}

/// Immutable template for a monster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterTemplate {
    pub id: MonsterId,
    pub name: String,

    pub max_hp: u32,
    /// Fixed AP pool; monsters do not regenerate AP mid-session.
    pub ap_pool: u32,

    pub attack: u32,
    pub magic_attack: u32,
    pub defense: u32,
    pub magic_defense: u32,
    pub accuracy: u32,
    pub evasion: u32,
    pub speed: u32,

    pub xp_reward: u64,
    pub col_reward: u64,

    /// Skills this monster can use, with per-monster overrides.
    pub skills: Vec<MonsterSkillAssignment>,
    /// Ordered skill-id sequences the intent selector draws from.
    pub attack_patterns: Vec<Vec<MonsterSkillId>>,
}

impl MonsterTemplate {
    /// Look up this monster's assignment for a skill id, if any.
    pub fn assignment(&self, id: MonsterSkillId) -> Option<&MonsterSkillAssignment> {
        self.skills.iter().find(|a| a.skill == id)
    }
}

/// Read-only lookup of monster templates and monster skill templates.
pub trait MonsterOracle: Send + Sync {
    fn monster(&self, id: MonsterId) -> Option<&MonsterTemplate>;
    fn monster_skill(&self, id: MonsterSkillId) -> Option<&MonsterSkillTemplate>;
}
