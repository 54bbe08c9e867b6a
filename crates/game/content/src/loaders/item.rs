//! Item catalog loader.

use std::path::Path;

use battle_core::ItemDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemDefinition>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    ///
    /// # Returns
    ///
    /// Returns a Vec of ItemDefinitions.
    pub fn load(path: &Path) -> LoadResult<Vec<ItemDefinition>> {
        let content = read_file(path)?;
        let catalog: ItemCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        ensure_unique_ids("item", catalog.items.iter().map(|i| i.id.as_str()))?;
        tracing::debug!(count = catalog.items.len(), path = %path.display(), "loaded items");
        Ok(catalog.items)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::EffectKind;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn loads_items() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(items: [
                (id: "potion", name: "Potion", effect: (kind: heal, value: 40)),
                (id: "smoke", name: "Smoke Bomb", effect: (kind: utility)),
            ])"#
        )
        .unwrap();

        let items = ItemLoader::load(file.path()).unwrap();
        assert_eq!(items[0].effect.kind, EffectKind::Heal);
        assert_eq!(items[0].effect.value, 40);
        assert_eq!(items[1].effect.kind, EffectKind::Utility);
    }

    #[test]
    fn reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(items: [(id: \"potion\")])").unwrap();

        let err = ItemLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse item catalog RON"));
    }
}
