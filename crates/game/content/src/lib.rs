//! Data-driven battle content and loaders.
//!
//! This crate houses static battle content and provides loaders for RON/TOML data files:
//! - Enemy templates (stats, resistances, rewards) via RON
//! - Skill and item definitions via RON
//! - Party roster, starting inventory and resonance via RON
//! - Encounter lists via RON
//! - Battle configuration via TOML
//!
//! Loaded definitions are gathered into a [`ContentCatalog`], which implements
//! the battle-core oracle traits. Content never appears in battle state; the
//! engine only reads it through those oracles.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ContentCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, Encounter, EncounterLoader, EnemyLoader, ItemLoader,
    ItemStock, PartyLoader, PartyMember, PartyRoster, SkillLoader,
};
