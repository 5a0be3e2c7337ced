/// The six base attributes that define a character.
///
/// - **STR** (Strength): physical damage and crit damage scaling
/// - **AGI** (Agility): evasion and accuracy
/// - **VIT** (Vitality): max HP and flat damage reduction
/// - **INT** (Intelligence): magic amplification and debuff resistance
/// - **DEX** (Dexterity): crit chance and cooldown reduction
/// - **LUK** (Luck): drop rate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttributes {
    pub strength: u32,
    pub agility: u32,
    pub vitality: u32,
    pub intelligence: u32,
    pub dexterity: u32,
    pub luck: u32,
}

impl BaseAttributes {
    pub fn new(
        strength: u32,
        agility: u32,
        vitality: u32,
        intelligence: u32,
        dexterity: u32,
        luck: u32,
    ) -> Self {
        Self {
            strength,
            agility,
            vitality,
            intelligence,
            dexterity,
            luck,
        }
    }
}
