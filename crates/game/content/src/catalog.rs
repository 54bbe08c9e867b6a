//! In-memory catalog of static definitions.

use std::collections::HashMap;

use battle_core::{
    EnemyOracle, EnemyTemplate, ItemDefinition, ItemOracle, SkillDefinition, SkillOracle,
};

/// Enemy templates, skills and items keyed by id.
///
/// Later inserts replace earlier definitions with the same id.
#[derive(Clone, Debug, Default)]
pub struct ContentCatalog {
    enemies: HashMap<String, EnemyTemplate>,
    skills: HashMap<String, SkillDefinition>,
    items: HashMap<String, ItemDefinition>,
}

impl ContentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from loaded definition lists.
    pub fn from_parts(
        enemies: impl IntoIterator<Item = EnemyTemplate>,
        skills: impl IntoIterator<Item = SkillDefinition>,
        items: impl IntoIterator<Item = ItemDefinition>,
    ) -> Self {
        let mut catalog = Self::new();
        enemies.into_iter().for_each(|e| catalog.insert_enemy(e));
        skills.into_iter().for_each(|s| catalog.insert_skill(s));
        items.into_iter().for_each(|i| catalog.insert_item(i));
        catalog
    }

    pub fn insert_enemy(&mut self, template: EnemyTemplate) {
        self.enemies.insert(template.id.clone(), template);
    }

    pub fn insert_skill(&mut self, skill: SkillDefinition) {
        self.skills.insert(skill.id.clone(), skill);
    }

    pub fn insert_item(&mut self, item: ItemDefinition) {
        self.items.insert(item.id.clone(), item);
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl EnemyOracle for ContentCatalog {
    fn template(&self, id: &str) -> Option<&EnemyTemplate> {
        self.enemies.get(id)
    }
}

impl SkillOracle for ContentCatalog {
    fn skill(&self, id: &str) -> Option<&SkillDefinition> {
        self.skills.get(id)
    }
}

impl ItemOracle for ContentCatalog {
    fn item(&self, id: &str) -> Option<&ItemDefinition> {
        self.items.get(id)
    }
}
