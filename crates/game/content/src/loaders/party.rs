//! Party roster loader.
//!
//! The roster carries what a battle needs from outside the fight: character
//! stat snapshots, the battle inventory and the shared resonance pool.

use std::path::Path;

use battle_core::{Battler, CombatStats, ResonanceMeter, Resistances, WeaponProfile};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One party member as stored in data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyMember {
    pub name: String,
    pub max_hp: u32,
    /// Current HP carried in from outside the battle. `None` means full HP.
    #[serde(default)]
    pub hp: Option<u32>,
    pub stats: CombatStats,
    #[serde(default)]
    pub weapon: Option<WeaponProfile>,
    #[serde(default)]
    pub resistances: Resistances,
}

impl PartyMember {
    /// Builds a battler for this member.
    pub fn to_battler(&self) -> Battler {
        let mut battler = Battler::character(self.name.clone(), self.max_hp, self.stats)
            .with_resistances(self.resistances);
        if let Some(hp) = self.hp {
            battler = battler.with_hp(hp);
        }
        if let Some(weapon) = self.weapon {
            battler = battler.with_weapon(weapon);
        }
        battler
    }
}

/// Units of one item in the battle inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStock {
    pub item_id: String,
    pub count: u32,
}

/// Party roster structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyRoster {
    pub members: Vec<PartyMember>,
    #[serde(default)]
    pub inventory: Vec<ItemStock>,
    #[serde(default)]
    pub resonance: u32,
    #[serde(default = "default_resonance_max")]
    pub resonance_max: u32,
}

fn default_resonance_max() -> u32 {
    100
}

impl PartyRoster {
    /// Party battlers in roster order.
    pub fn battlers(&self) -> Vec<Battler> {
        self.members.iter().map(PartyMember::to_battler).collect()
    }

    /// Shared resonance pool, clamped to its maximum.
    pub fn resonance_meter(&self) -> ResonanceMeter {
        ResonanceMeter::new(self.resonance, self.resonance_max)
    }
}

/// Loader for the party roster from RON files.
pub struct PartyLoader;

impl PartyLoader {
    /// Load the party roster from a RON file.
    pub fn load(path: &Path) -> LoadResult<PartyRoster> {
        let content = read_file(path)?;
        let roster: PartyRoster = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party roster RON: {}", e))?;

        if roster.members.is_empty() {
            anyhow::bail!("Party roster {} has no members", path.display());
        }
        for member in &roster.members {
            if member.max_hp == 0 {
                anyhow::bail!("Party member '{}' has zero max_hp", member.name);
            }
        }

        tracing::debug!(
            members = roster.members.len(),
            items = roster.inventory.len(),
            "loaded party roster"
        );
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::ResonancePool;
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn loads_roster_and_builds_battlers() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                members: [
                    (name: "Ayla", max_hp: 120, hp: Some(80), stats: (attack: 12, speed: 50, accuracy: 95)),
                    (name: "Bram", max_hp: 90, stats: (attack: 9, speed: 35), weapon: Some((min: 2, max: 5))),
                ],
                inventory: [(item_id: "potion", count: 3)],
                resonance: 40,
            )"#
        )
        .unwrap();

        let roster = PartyLoader::load(file.path()).unwrap();
        let battlers = roster.battlers();

        assert_eq!(battlers.len(), 2);
        assert_eq!(battlers[0].hp(), 80);
        assert_eq!(battlers[0].max_hp(), 120);
        assert!(battlers[0].weapon().is_none());
        assert_eq!(battlers[1].hp(), 90);
        assert_eq!(battlers[1].weapon().map(|w| w.max), Some(5));

        assert_eq!(roster.inventory[0].count, 3);
        let meter = roster.resonance_meter();
        assert_eq!(meter.available(), 40);
        assert_eq!(meter.max(), 100);
    }

    #[test]
    fn rejects_empty_party() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "(members: [])").unwrap();

        let err = PartyLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("has no members"));
    }
}
