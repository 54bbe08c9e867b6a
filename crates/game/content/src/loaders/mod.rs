//! Content loaders for reading battle data from files.
//!
//! Each loader converts one RON/TOML file into battle-core types. The
//! [`ContentFactory`] knows the data directory layout and ties them together.

pub mod config;
pub mod encounters;
pub mod enemies;
pub mod factory;
pub mod item;
pub mod party;
pub mod skills;

pub use config::ConfigLoader;
pub use encounters::{Encounter, EncounterLoader};
pub use enemies::EnemyLoader;
pub use factory::ContentFactory;
pub use item::ItemLoader;
pub use party::{ItemStock, PartyLoader, PartyMember, PartyRoster};
pub use skills::SkillLoader;

use std::collections::HashSet;
use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Rejects catalogs that define the same id twice.
pub(crate) fn ensure_unique_ids<'a>(
    kind: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> LoadResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id '{}'", kind, id);
        }
    }
    Ok(())
}
