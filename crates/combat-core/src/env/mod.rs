//! Read-only environment the resolver runs against.
//!
//! Skill and monster templates are immutable content; the resolver reaches
//! them through oracle traits so it stays free of persistence concerns. The
//! [`CombatEnv`] aggregate bundles the oracles, and [`RngSource`] is the sole
//! randomness seam (injected, so tests can replay fixed sequences).

mod monsters;
mod rng;
mod skills;

pub use monsters::{MonsterOracle, MonsterSkillAssignment, MonsterSkillTemplate, MonsterTemplate};
pub use rng::{Pcg32, RngSource, SequenceSource};
pub use skills::{DamageType, NarrativeSet, SkillOracle, SkillTemplate, StatusApplication};

/// Aggregates the read-only oracles required by one resolution step.
#[derive(Clone, Copy)]
pub struct CombatEnv<'a> {
    pub skills: &'a dyn SkillOracle,
    pub monsters: &'a dyn MonsterOracle,
}

impl<'a> CombatEnv<'a> {
    pub fn new(skills: &'a dyn SkillOracle, monsters: &'a dyn MonsterOracle) -> Self {
        Self { skills, monsters }
    }
}
