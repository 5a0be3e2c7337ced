//! Stat model: pure derivation of combat stats from base attributes.
//!
//! Base attributes (STR/AGI/VIT/INT/DEX/LUK) are the single source of truth
//! and the only numbers stored on the player record. Everything else
//! (max HP, accuracy, evasion, crit) is recomputed from them on demand.

mod attributes;
mod derived;

pub use attributes::BaseAttributes;
pub use derived::DerivedStats;
