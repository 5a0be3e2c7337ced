use crate::entity::EffectKind;
use crate::ids::SkillId;

/// Damage category of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum DamageType {
    Physical,
    Magic,
    /// Utility skills (pure buffs, heals) that deal no damage.
    None,
}

/// Optional buff/debuff a skill may apply on use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusApplication {
    pub kind: EffectKind,
    /// Application chance in percent.
    pub chance: u32,
    /// Duration in turns.
    pub duration: u32,
    pub magnitude: i32,
}

/// Per-branch narrative templates with a `{damage}` placeholder.
///
/// `crit` is a reserved slot: entities carry crit stats and templates may
/// define crit text, but no resolver branch currently selects it.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NarrativeSet {
    /// Execution description emitted before the outcome line.
    pub use_line: Option<String>,
    /// Emitted when the action connects.
    pub hit: Option<String>,
    /// Emitted when the action misses.
    pub miss: Option<String>,
    /// Reserved for critical hits.
    pub crit: Option<String>,
}

impl NarrativeSet {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Immutable template for a player skill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillTemplate {
    pub id: SkillId,
    pub name: String,
    pub damage_type: DamageType,
    /// Damage amplification value; the base the variance factor scales.
    pub amp: u32,
    /// Accuracy in percent.
    pub accuracy: u32,
    /// Tie-break priority; higher acts first within a phase.
    pub speed: u32,
    pub ap_cost: u32,
    pub status: Option<StatusApplication>,
    /// Positive values heal the user on cast, negative ones hurt them.
    pub self_heal: i32,
    pub narrative: NarrativeSet,
}

/// Read-only lookup of player skill templates.
///
/// `None` means the id dangles (deleted or never-seeded content); the
/// resolver recovers locally by skipping the action.
pub trait SkillOracle: Send + Sync {
    fn skill(&self, id: SkillId) -> Option<&SkillTemplate>;
}
