use super::BaseAttributes;

/// Derived combat statistics.
///
/// Pure function of [`BaseAttributes`]; never stored, always recomputed.
/// Percent-valued stats keep fractional precision because several formulas
/// scale by half points (AGI × 0.5 and friends).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    /// Maximum hit points.
    pub max_hp: u32,

    /// Flat bonus added to physical skill damage.
    pub physical_damage_bonus: u32,

    /// Extra damage percent applied on critical hits.
    pub crit_damage_bonus: f64,

    /// Chance percent to evade an incoming attack.
    pub evasion: f64,

    /// Bonus percent to own accuracy.
    pub accuracy: f64,

    /// Percent amplification of magic skill damage.
    pub magic_amp: f64,

    /// Percent chance to resist an incoming debuff.
    pub debuff_resist: f64,

    /// Percent chance to land a critical hit.
    pub crit_chance: f64,

    /// Percent reduction of skill cooldowns.
    pub cooldown_reduction: f64,

    /// Percent bonus to item drop rate.
    pub drop_rate: f64,
}

impl DerivedStats {
    /// Compute all derived stats from base attributes.
    ///
    /// Formulas:
    /// - max HP: `100 + VIT × 10`
    /// - physical damage bonus: `STR × 2`; crit damage bonus: `STR × 1` %
    /// - evasion: `AGI × 0.5` %; accuracy: `AGI × 0.3` %
    /// - magic amp: `INT × 0.3` %; debuff resist: `INT × 0.5` %
    /// - crit chance: `DEX × 0.3` %; cooldown reduction: `DEX × 0.5` %
    /// - drop rate: `LUK × 0.5` %
    pub fn compute(attrs: &BaseAttributes) -> Self {
        // Percent scales divide an exact integer product by ten.
        Self {
            max_hp: 100 + attrs.vitality * 10,
            physical_damage_bonus: attrs.strength * 2,
            crit_damage_bonus: f64::from(attrs.strength),
            evasion: f64::from(attrs.agility * 5) / 10.0,
            accuracy: f64::from(attrs.agility * 3) / 10.0,
            magic_amp: f64::from(attrs.intelligence * 3) / 10.0,
            debuff_resist: f64::from(attrs.intelligence * 5) / 10.0,
            crit_chance: f64::from(attrs.dexterity * 3) / 10.0,
            cooldown_reduction: f64::from(attrs.dexterity * 5) / 10.0,
            drop_rate: f64::from(attrs.luck * 5) / 10.0,
        }
    }
}
