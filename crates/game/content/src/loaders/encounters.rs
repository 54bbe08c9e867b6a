//! Encounter list loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, ensure_unique_ids, read_file};

/// A named group of enemy template ids fought together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub id: String,
    pub enemies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct EncounterCatalog {
    encounters: Vec<Encounter>,
}

/// Loader for encounter lists from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load encounters from a RON file.
    ///
    /// Template ids are not resolved here; the battle builder rejects unknown
    /// ids when the encounter is instantiated.
    pub fn load(path: &Path) -> LoadResult<Vec<Encounter>> {
        let content = read_file(path)?;
        let catalog: EncounterCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter list RON: {}", e))?;

        ensure_unique_ids("encounter", catalog.encounters.iter().map(|e| e.id.as_str()))?;
        if let Some(empty) = catalog.encounters.iter().find(|e| e.enemies.is_empty()) {
            anyhow::bail!("Encounter '{}' has no enemies", empty.id);
        }

        tracing::debug!(count = catalog.encounters.len(), "loaded encounters");
        Ok(catalog.encounters)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn loads_encounters() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(encounters: [
                (id: "cave_mouth", enemies: ["slime", "slime", "bat"]),
                (id: "lair", enemies: ["ember_drake"]),
            ])"#
        )
        .unwrap();

        let encounters = EncounterLoader::load(file.path()).unwrap();
        assert_eq!(encounters.len(), 2);
        assert_eq!(encounters[0].enemies, ["slime", "slime", "bat"]);
    }

    #[test]
    fn rejects_empty_encounters() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"(encounters: [(id: "void", enemies: [])])"#).unwrap();

        let err = EncounterLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Encounter 'void'"));
    }
}
