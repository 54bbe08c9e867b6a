//! Deterministic battle logic for an active-time battle system.
//!
//! `battle-core` owns the rules: gauges that fill with speed, a single-lock
//! action queue, the damage pipeline, elemental stacks and discharges, and
//! battle lifecycle. It renders nothing and reads no files. All state
//! mutation flows through [`engine::BattleContext`]; collaborators (content
//! loaders, front-ends) depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod state;

pub use action::{Action, ActionQueue, ActionSeq, QueuedAction};
pub use combat::{AttackOutcome, AttackResult, Strike};
pub use config::{BattleConfig, DischargeConfig, VarianceRange};
pub use engine::{
    BattleContext, BattlePhase, BattleSetup, DecisionPolicy, DecisionView, PendingDecision,
    RandomTargetPolicy,
};
pub use env::{
    BattleEnv, EffectKind, EffectSpec, EnemyOracle, EnemyTemplate, ItemDefinition, ItemDrop,
    ItemOracle, PcgRng, ResonanceMeter, ResonancePool, RewardTable, Rewards, RngOracle,
    RollPurpose, SkillDefinition, SkillOracle, StatusRider, compute_seed,
};
pub use error::{BattleError, CommandError, ErrorSeverity, SetupError};
pub use event::{AbortReason, BattleEvent, BattleObserver, EffectSource, SideEffect};
pub use state::{
    AtbGauge, Battler, BattlerId, BattlerKind, CharacterData, CombatStats, Element, ElementStacks,
    ElementTable, EnemyData, Resistances, Side, StackTransition, StatKind, StatModifier,
    StatModifiers, Status, StatusEffect, StatusEffects, WeaponProfile,
};
