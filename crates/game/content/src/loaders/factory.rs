//! Content factory for building catalogs from data files.

use std::path::{Path, PathBuf};

use battle_core::{BattleConfig, EnemyTemplate, ItemDefinition, SkillDefinition};

use crate::catalog::ContentCatalog;
use crate::loaders::{
    ConfigLoader, Encounter, EncounterLoader, EnemyLoader, ItemLoader, LoadResult, PartyLoader,
    PartyRoster, SkillLoader,
};

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── enemies.ron
/// ├── skills.ron
/// ├── items.ron
/// ├── party.ron
/// └── encounters.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load enemy templates from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<EnemyTemplate>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load skill definitions from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillDefinition>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemDefinition>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load the party roster from `party.ron`.
    pub fn load_party(&self) -> LoadResult<PartyRoster> {
        PartyLoader::load(&self.data_dir.join("party.ron"))
    }

    /// Load encounter lists from `encounters.ron`.
    pub fn load_encounters(&self) -> LoadResult<Vec<Encounter>> {
        EncounterLoader::load(&self.data_dir.join("encounters.ron"))
    }

    /// Load enemies, skills and items into one catalog.
    ///
    /// Also checks that every item dropped by an enemy is defined.
    pub fn load_catalog(&self) -> LoadResult<ContentCatalog> {
        let enemies = self.load_enemies()?;
        let skills = self.load_skills()?;
        let items = self.load_items()?;

        for enemy in &enemies {
            for drop in &enemy.rewards.drops {
                if !items.iter().any(|item| item.id == drop.item_id) {
                    anyhow::bail!(
                        "Enemy '{}' drops unknown item '{}'",
                        enemy.id,
                        drop.item_id
                    );
                }
            }
        }

        let catalog = ContentCatalog::from_parts(enemies, skills, items);
        tracing::info!(
            enemies = catalog.enemy_count(),
            skills = catalog.skill_count(),
            items = catalog.item_count(),
            data_dir = %self.data_dir.display(),
            "content catalog loaded"
        );
        Ok(catalog)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use battle_core::{EnemyOracle, ItemOracle, SkillOracle};
    use tempfile::TempDir;

    use super::*;

    fn data_dir(enemies: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("enemies.ron"), enemies).unwrap();
        fs::write(
            dir.path().join("skills.ron"),
            r#"(skills: [(id: "spark", name: "Spark", rp_cost: 10, effect: (kind: damage, value: 8, element: Some(lightning)))])"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("items.ron"),
            r#"(items: [(id: "potion", name: "Potion", effect: (kind: heal, value: 40))])"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn loads_catalog_from_directory() {
        let dir = data_dir(
            r#"(enemies: [(id: "slime", name: "Slime", max_hp: 30, stats: (attack: 6),
                rewards: (xp: 5, drops: [(item_id: "potion", chance_pct: 20)]))])"#,
        );

        let catalog = ContentFactory::new(dir.path()).load_catalog().unwrap();
        assert!(catalog.template("slime").is_some());
        assert_eq!(catalog.skill("spark").map(|s| s.rp_cost), Some(10));
        assert!(catalog.item("potion").is_some());
    }

    #[test]
    fn rejects_drops_of_unknown_items() {
        let dir = data_dir(
            r#"(enemies: [(id: "slime", name: "Slime", max_hp: 30, stats: (attack: 6),
                rewards: (drops: [(item_id: "gel", chance_pct: 50)]))])"#,
        );

        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("unknown item 'gel'"));
    }

    #[test]
    fn missing_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(ContentFactory::new(dir.path()).load_config().is_err());
    }
}
