//! Enemy template loader.

use std::path::Path;

use battle_core::EnemyTemplate;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<EnemyTemplate>,
}

/// Loader for enemy templates from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    /// Load enemy templates from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an EnemyCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of EnemyTemplates with unique ids.
    pub fn load(path: &Path) -> LoadResult<Vec<EnemyTemplate>> {
        let content = read_file(path)?;
        let catalog: EnemyCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        ensure_unique_ids("enemy", catalog.enemies.iter().map(|e| e.id.as_str()))?;
        for enemy in &catalog.enemies {
            if enemy.max_hp == 0 {
                anyhow::bail!("Enemy '{}' has zero max_hp", enemy.id);
            }
            for drop in &enemy.rewards.drops {
                if drop.chance_pct > 100 {
                    anyhow::bail!(
                        "Enemy '{}' drop '{}' has chance {}% (max 100)",
                        enemy.id,
                        drop.item_id,
                        drop.chance_pct
                    );
                }
            }
        }

        tracing::debug!(count = catalog.enemies.len(), path = %path.display(), "loaded enemies");
        Ok(catalog.enemies)
    }
}
