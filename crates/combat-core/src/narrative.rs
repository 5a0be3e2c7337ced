//! Narrative compositor: pure text formatting for resolution events.
//!
//! Skills carry per-branch templates with a `{damage}` placeholder; this
//! module substitutes the computed damage and supplies stock lines for the
//! events that have no per-skill template (insufficient energy, defeat,
//! victory, flee).

/// Substitute the `{damage}` placeholder in a skill template.
pub fn fill(template: &str, damage: u32) -> String {
    template.replace("{damage}", &damage.to_string())
}

/// Stock line when a queued action's AP cost exceeds remaining AP.
pub fn insufficient_energy(skill: &str) -> String {
    format!("You lack the energy to use {skill}!")
}

/// Stock damage line for player skills without a `hit` template.
pub fn player_damage(skill: &str, target: &str, damage: u32) -> String {
    format!("{skill} strikes the {target} for {damage} damage!")
}

/// Stock line for monster hits without a `hit` template.
pub fn monster_damage(monster: &str, damage: u32) -> String {
    format!("The {monster} hits you for {damage} damage!")
}

/// Stock line for monster misses without a `miss` template.
pub fn monster_miss(monster: &str) -> String {
    format!("The {monster}'s attack misses you!")
}

/// Emitted the moment the monster's HP reaches zero.
pub fn monster_defeated(monster: &str) -> String {
    format!("The {monster} shatters into polygons!")
}

/// Emitted the moment the player's HP reaches zero.
pub fn player_defeated(player: &str) -> String {
    format!("{player} collapses. The battle is lost.")
}

/// Victory line with rewards, appended at resolution.
pub fn victory(xp: u64, col: u64) -> String {
    format!("Victory! You gain {xp} XP and {col} Col.")
}

pub fn flee_success() -> String {
    "You slip away from the battle.".to_string()
}

pub fn flee_failure(monster: &str, damage: u32) -> String {
    format!("You fail to escape! The {monster} punishes you for {damage} damage.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_substitutes_damage() {
        assert_eq!(
            fill("Sonic Leap carves in for {damage}!", 37),
            "Sonic Leap carves in for 37!"
        );
    }

    #[test]
    fn fill_without_placeholder_is_identity() {
        assert_eq!(fill("A flash of light.", 99), "A flash of light.");
    }

    #[test]
    fn fill_replaces_every_occurrence() {
        assert_eq!(fill("{damage} and {damage}", 5), "5 and 5");
    }

    #[test]
    fn insufficient_energy_names_the_skill() {
        let line = insufficient_energy("Vertical Arc");
        assert!(line.contains("lack the energy"));
        assert!(line.contains("Vertical Arc"));
    }
}
