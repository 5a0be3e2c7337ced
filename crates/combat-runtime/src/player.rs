//! Persisted player record and post-resolution bookkeeping.

use std::collections::BTreeMap;

use combat_core::stats::DerivedStats;
use combat_core::{BaseAttributes, PlayerId, Rewards, SkillId};

/// The slice of the player record the combat engine reads and writes.
///
/// Base attributes are the stored truth; HP/AP are the live meters carried
/// between sessions (AP regenerates over real time outside combat, which is
/// out of scope here).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    pub name: String,
    pub attributes: BaseAttributes,
    pub current_hp: u32,
    pub current_ap: u32,
    pub max_ap: u32,
    pub xp: u64,
    pub col: u64,
    /// Lifetime per-skill execution counters (skill-evolution unlocks read
    /// these elsewhere).
    pub skill_uses: BTreeMap<SkillId, u64>,
}

impl PlayerRecord {
    /// Persist the post-turn meters.
    pub fn set_meters(&mut self, hp: u32, ap: u32) {
        self.current_hp = hp;
        self.current_ap = ap;
    }

    /// Credit victory rewards.
    pub fn credit(&mut self, rewards: Rewards) {
        self.xp += rewards.xp;
        self.col += rewards.col;
    }

    /// Respawn after a lost session: HP back to the derived maximum, AP to
    /// max, and 10% of carried col forfeited (floor-rounded).
    pub fn apply_defeat_penalty(&mut self) {
        let derived = DerivedStats::compute(&self.attributes);
        self.current_hp = derived.max_hp;
        self.current_ap = self.max_ap;
        self.col -= self.col / 10;
    }

    /// Fold one turn's skill-use counts into the lifetime counters.
    pub fn record_uses(&mut self, uses: &BTreeMap<SkillId, u32>) {
        for (skill, count) in uses {
            *self.skill_uses.entry(*skill).or_insert(0) += u64::from(*count);
        }
    }
}
