//! Combat entities: normalized, side-agnostic snapshots of one combatant.
//!
//! An entity is derived at session start (and rebuilt each turn) from the
//! persisted player attributes or the monster template. Construction is pure:
//! identical inputs always produce identical snapshots, which is what makes
//! deterministic replay of a session possible.

use std::collections::BTreeMap;

use crate::env::MonsterTemplate;
use crate::ids::{MonsterId, PlayerId, SkillId};
use crate::stats::{BaseAttributes, DerivedStats};

/// Integer resource meter (HP, AP) tracked per combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Meter filled to its maximum.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Subtract `amount`, flooring at zero.
    pub fn deduct(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Add `amount`, capped at the maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = (self.current + amount).min(self.maximum);
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }
}

/// Which side of the battle an entity fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Player,
    Monster,
}

/// Category of a buff or debuff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EffectKind {
    AttackUp,
    DefenseUp,
    AttackDown,
    DefenseDown,
    Poison,
    Stun,
    Slow,
}

/// One active buff or debuff on an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEffect {
    pub kind: EffectKind,
    /// Turns remaining before the effect expires.
    pub remaining_turns: u32,
    /// Effect strength in the unit implied by `kind` (flat stat points or
    /// damage per turn).
    pub magnitude: i32,
}

/// Identity of a combatant, independent of which side it fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatantId {
    Player(PlayerId),
    Monster(MonsterId),
}

/// Normalized snapshot of one combatant.
///
/// Built once per turn from persisted stats; never persisted itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatEntity {
    pub id: CombatantId,
    pub name: String,
    pub side: Side,

    pub hp: ResourceMeter,
    pub ap: ResourceMeter,

    /// Base attributes the resolver formulas read directly (AGI for hit
    /// chance, VIT for damage reduction). Monsters get a zeroed block with
    /// the template's evasion folded into `evasion` below.
    pub attributes: BaseAttributes,

    pub attack: u32,
    pub magic_attack: u32,
    pub defense: u32,
    pub magic_defense: u32,
    pub accuracy: f64,
    pub evasion: f64,
    pub speed: u32,
    pub crit_chance: f64,
    pub crit_multiplier: f64,

    pub buffs: Vec<StatusEffect>,
    pub debuffs: Vec<StatusEffect>,
    /// Remaining cooldown turns per skill.
    pub cooldowns: BTreeMap<SkillId, u32>,
}

impl CombatEntity {
    /// Build the player-side entity from persisted attributes.
    ///
    /// `current_hp`/`current_ap` are the persisted values; they are clamped
    /// to the derived maximums so a respec or equipment change can never
    /// leave a meter above its cap.
    pub fn from_attributes(
        id: PlayerId,
        name: impl Into<String>,
        attributes: BaseAttributes,
        current_hp: u32,
        current_ap: u32,
        max_ap: u32,
    ) -> Self {
        let derived = DerivedStats::compute(&attributes);
        Self {
            id: CombatantId::Player(id),
            name: name.into(),
            side: Side::Player,
            hp: ResourceMeter::new(current_hp, derived.max_hp),
            ap: ResourceMeter::new(current_ap, max_ap),
            attributes,
            attack: derived.physical_damage_bonus,
            magic_attack: 0,
            defense: attributes.vitality / 2,
            magic_defense: attributes.intelligence / 2,
            accuracy: derived.accuracy,
            evasion: derived.evasion,
            speed: attributes.agility,
            crit_chance: derived.crit_chance,
            crit_multiplier: 1.0 + derived.crit_damage_bonus / 100.0,
            buffs: Vec::new(),
            debuffs: Vec::new(),
            cooldowns: BTreeMap::new(),
        }
    }

    /// Build the monster-side entity from its template, HP at max and the
    /// template's fixed AP pool.
    pub fn from_template(template: &MonsterTemplate) -> Self {
        Self {
            id: CombatantId::Monster(template.id),
            name: template.name.clone(),
            side: Side::Monster,
            hp: ResourceMeter::full(template.max_hp),
            ap: ResourceMeter::full(template.ap_pool),
            attributes: BaseAttributes::default(),
            attack: template.attack,
            magic_attack: template.magic_attack,
            defense: template.defense,
            magic_defense: template.magic_defense,
            accuracy: f64::from(template.accuracy),
            evasion: f64::from(template.evasion),
            speed: template.speed,
            crit_chance: 0.0,
            crit_multiplier: 1.0,
            buffs: Vec::new(),
            debuffs: Vec::new(),
            cooldowns: BTreeMap::new(),
        }
    }
}
