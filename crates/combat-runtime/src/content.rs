//! Immutable content catalogs: skills, monster templates, areas.
//!
//! Catalogs are loaded once from RON files (or built programmatically in
//! tests) and handed to the core as its oracle implementations. Content is
//! never mutated at runtime; editors and seeders live outside this system.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use combat_core::{
    AreaId, MonsterId, MonsterOracle, MonsterSkillId, MonsterSkillTemplate, MonsterTemplate,
    SkillId, SkillOracle, SkillTemplate,
};

/// Failures while loading content catalogs.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read catalog file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog")]
    Ron(#[from] ron::error::SpannedError),
}

/// A hunting area: a named group of monsters. Starting combat against an
/// area picks its first monster.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AreaRecord {
    pub id: AreaId,
    pub name: String,
    pub monsters: Vec<MonsterId>,
}

/// Player skill catalog.
#[derive(Debug, Default)]
pub struct SkillCatalog {
    skills: HashMap<SkillId, SkillTemplate>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_templates(templates: Vec<SkillTemplate>) -> Self {
        Self {
            skills: templates.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Load from a RON file holding a list of [`SkillTemplate`].
    pub fn from_ron_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    pub fn from_ron(text: &str) -> Result<Self, ContentError> {
        let templates: Vec<SkillTemplate> = ron::from_str(text)?;
        Ok(Self::from_templates(templates))
    }

    pub fn insert(&mut self, template: SkillTemplate) {
        self.skills.insert(template.id, template);
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl SkillOracle for SkillCatalog {
    fn skill(&self, id: SkillId) -> Option<&SkillTemplate> {
        self.skills.get(&id)
    }
}

/// RON layout of a monster catalog file.
#[derive(Debug, Default, serde::Deserialize)]
struct MonsterCatalogFile {
    monsters: Vec<MonsterTemplate>,
    skills: Vec<MonsterSkillTemplate>,
    #[serde(default)]
    areas: Vec<AreaRecord>,
}

/// Monster templates, monster skills, and areas.
#[derive(Debug, Default)]
pub struct MonsterCatalog {
    monsters: HashMap<MonsterId, MonsterTemplate>,
    skills: HashMap<MonsterSkillId, MonsterSkillTemplate>,
    areas: HashMap<AreaId, AreaRecord>,
}

impl MonsterCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ron_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    pub fn from_ron(text: &str) -> Result<Self, ContentError> {
        let file: MonsterCatalogFile = ron::from_str(text)?;
        let mut catalog = Self::new();
        for monster in file.monsters {
            catalog.insert_monster(monster);
        }
        for skill in file.skills {
            catalog.insert_skill(skill);
        }
        for area in file.areas {
            catalog.insert_area(area);
        }
        Ok(catalog)
    }

    pub fn insert_monster(&mut self, template: MonsterTemplate) {
        self.monsters.insert(template.id, template);
    }

    pub fn insert_skill(&mut self, template: MonsterSkillTemplate) {
        self.skills.insert(template.id, template);
    }

    pub fn insert_area(&mut self, area: AreaRecord) {
        self.areas.insert(area.id, area);
    }

    pub fn area(&self, id: AreaId) -> Option<&AreaRecord> {
        self.areas.get(&id)
    }
}

impl MonsterOracle for MonsterCatalog {
    fn monster(&self, id: MonsterId) -> Option<&MonsterTemplate> {
        self.monsters.get(&id)
    }

    fn monster_skill(&self, id: MonsterSkillId) -> Option<&MonsterSkillTemplate> {
        self.skills.get(&id)
    }
}
