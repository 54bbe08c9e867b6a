//! Frame loop driving one battle with auto-acting players.
use std::collections::HashMap;

use anyhow::{Context, Result};
use battle_content::{ContentCatalog, ContentFactory, PartyRoster};
use battle_core::{
    AbortReason, BattleConfig, BattleContext, BattleEnv, BattleEvent, BattleObserver, BattlePhase,
    BattlerId, EffectSource, Element, ResonanceMeter, Rewards, SideEffect, Status,
};

use crate::config::SimConfig;

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Victory(Rewards),
    Defeat,
    /// The simulated time limit elapsed first.
    TimedOut,
}

/// A loaded battle plus the collaborators it borrows on every tick.
pub struct Simulation {
    battle: BattleContext,
    catalog: ContentCatalog,
    resonance: ResonanceMeter,
    dt: f32,
    max_seconds: f64,
}

impl Simulation {
    /// Loads content from the configured data directory and builds the battle.
    pub fn load(config: &SimConfig) -> Result<Self> {
        let factory = ContentFactory::new(&config.data_dir);
        let battle_config = factory.load_config()?;
        let catalog = factory.load_catalog()?;
        let roster = factory.load_party()?;
        let encounters = factory.load_encounters()?;

        let encounter = match &config.encounter {
            Some(id) => encounters
                .iter()
                .find(|e| &e.id == id)
                .with_context(|| format!("Unknown encounter '{}'", id))?,
            None => encounters.first().context("No encounters defined")?,
        };
        tracing::info!(encounter = %encounter.id, seed = config.seed, "building battle");

        let battle = Self::build_battle(
            battle_config,
            &catalog,
            &roster,
            &encounter.enemies,
            config.seed,
        )?;

        Ok(Self {
            battle,
            catalog,
            resonance: roster.resonance_meter(),
            dt: config.frame_dt(),
            max_seconds: config.max_seconds,
        })
    }

    fn build_battle(
        battle_config: BattleConfig,
        catalog: &ContentCatalog,
        roster: &PartyRoster,
        enemies: &[String],
        seed: u64,
    ) -> Result<BattleContext> {
        let mut setup = BattleContext::builder(battle_config).seed(seed);
        for battler in roster.battlers() {
            setup = setup.party_member(battler);
        }
        for stock in &roster.inventory {
            setup = setup.item(stock.item_id.clone(), stock.count);
        }
        let battle = setup.encounter(catalog, enemies)?.build()?;
        Ok(battle)
    }

    pub fn battle(&self) -> &BattleContext {
        &self.battle
    }

    /// Runs frames until the battle is decided or the time limit passes,
    /// forwarding every event to `observer`.
    pub fn run(&mut self, observer: &mut dyn BattleObserver) -> Outcome {
        while !self.battle.is_over() && self.battle.clock() < self.max_seconds {
            self.step();
            for event in self.battle.drain_events() {
                event.dispatch(observer);
            }
        }

        match self.battle.phase() {
            BattlePhase::Victory => {
                Outcome::Victory(self.battle.rewards().cloned().unwrap_or_default())
            }
            BattlePhase::Defeat => Outcome::Defeat,
            BattlePhase::Active | BattlePhase::Finished => Outcome::TimedOut,
        }
    }

    /// One frame: submit auto actions for idle players, then tick.
    fn step(&mut self) {
        let idle: Vec<BattlerId> = self
            .battle
            .party()
            .filter(|b| b.is_alive() && b.is_ready() && !self.battle.is_committed(b.id()))
            .map(|b| b.id())
            .collect();
        for actor in idle {
            if let Err(err) = self.battle.auto_act(actor) {
                tracing::debug!(%actor, %err, "auto action rejected");
            }
        }

        let mut env = BattleEnv::new(&self.catalog, &self.catalog, &mut self.resonance);
        self.battle.tick(&mut env, self.dt);
    }
}

/// Prints a line per notable event, naming battlers.
pub struct EventPrinter {
    names: HashMap<BattlerId, String>,
}

impl EventPrinter {
    pub fn new(battle: &BattleContext) -> Self {
        Self {
            names: battle
                .battlers()
                .iter()
                .map(|b| (b.id(), b.name().to_owned()))
                .collect(),
        }
    }

    fn name(&self, id: BattlerId) -> &str {
        self.names.get(&id).map_or("?", String::as_str)
    }

    fn describe(&self, event: &BattleEvent) -> Option<String> {
        let line = match event {
            BattleEvent::AttackResolved {
                actor,
                target,
                hit: false,
                ..
            } => format!("{} misses {}", self.name(*actor), self.name(*target)),
            BattleEvent::AttackResolved {
                actor,
                target,
                damage,
                crit,
                element,
                ..
            } => format!(
                "{} hits {} for {}{}{}",
                self.name(*actor),
                self.name(*target),
                damage,
                element.map(|e| format!(" {e}")).unwrap_or_default(),
                if *crit { " (critical)" } else { "" }
            ),
            BattleEvent::EffectUsed {
                actor,
                target,
                source,
            } => {
                let used = match source {
                    EffectSource::Skill(id) | EffectSource::Item(id) => id,
                };
                format!("{} uses {} on {}", self.name(*actor), used, self.name(*target))
            }
            BattleEvent::Defended { actor } => format!("{} defends", self.name(*actor)),
            BattleEvent::Healed { target, amount } => {
                format!("{} recovers {} HP", self.name(*target), amount)
            }
            BattleEvent::BuffApplied {
                target,
                stat,
                amount,
                turns,
            } => format!(
                "{} gains {:+} {} for {} turns",
                self.name(*target),
                amount,
                stat,
                turns
            ),
            BattleEvent::StatusTicked {
                target,
                status,
                amount,
            } => format!("{} {} ticks for {}", self.name(*target), status, amount),
            BattleEvent::StatusExpired { target, status } => {
                format!("{} is no longer {}", self.name(*target), status)
            }
            BattleEvent::ActionSkipped { actor, status } => {
                format!("{} cannot act ({})", self.name(*actor), status)
            }
            BattleEvent::ActionAborted { actor, reason } => {
                format!("{}'s action fizzles: {}", self.name(*actor), abort_text(reason))
            }
            _ => return None,
        };
        Some(line)
    }
}

impl BattleObserver for EventPrinter {
    fn on_status_applied(&mut self, target: BattlerId, status: Status, duration: u32) {
        println!(
            "{} is afflicted with {} ({} turns)",
            self.name(target),
            status,
            duration
        );
    }

    fn on_elemental_discharge(
        &mut self,
        target: BattlerId,
        element: Element,
        side_effects: &[SideEffect],
    ) {
        println!(
            "{} discharges {} ({} side effects)",
            self.name(target),
            element,
            side_effects.len()
        );
    }

    fn on_battler_defeated(&mut self, battler: BattlerId) {
        println!("{} is defeated", self.name(battler));
    }

    fn on_battle_ended(&mut self, victory: bool, rewards: &Rewards) {
        if victory {
            println!(
                "Victory: {} xp, {} credits, items {:?}",
                rewards.xp, rewards.credits, rewards.items
            );
        } else {
            println!("Defeat");
        }
    }

    fn on_event(&mut self, event: &BattleEvent) {
        if let Some(line) = self.describe(event) {
            println!("{line}");
        }
    }
}

fn abort_text(reason: &AbortReason) -> String {
    match reason {
        AbortReason::ActorUnavailable => "actor unavailable".to_owned(),
        AbortReason::TargetUnavailable => "target unavailable".to_owned(),
        AbortReason::InsufficientResonance {
            required,
            available,
        } => format!("needs {required} resonance, has {available}"),
        AbortReason::UnknownSkill(id) => format!("unknown skill '{id}'"),
        AbortReason::UnknownItem(id) => format!("unknown item '{id}'"),
        AbortReason::OutOfStock(id) => format!("no {id} left"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Tally {
        events: usize,
        endings: usize,
    }

    impl BattleObserver for Tally {
        fn on_battle_ended(&mut self, _victory: bool, _rewards: &Rewards) {
            self.endings += 1;
        }

        fn on_event(&mut self, _event: &BattleEvent) {
            self.events += 1;
        }
    }

    fn bundled(seed: u64, encounter: &str) -> SimConfig {
        SimConfig {
            seed,
            encounter: Some(encounter.to_owned()),
            ..SimConfig::default()
        }
    }

    #[test]
    fn bundled_encounter_runs_to_an_end() {
        let mut simulation = Simulation::load(&bundled(3, "cave_mouth")).unwrap();
        let mut tally = Tally::default();

        let outcome = simulation.run(&mut tally);

        assert_ne!(outcome, Outcome::TimedOut);
        assert_eq!(tally.endings, 1);
        assert!(tally.events > 0);
        assert!(simulation.battle().is_over());
    }

    #[test]
    fn same_seed_same_outcome() {
        let run = |seed| {
            let mut simulation = Simulation::load(&bundled(seed, "drake_lair")).unwrap();
            let outcome = simulation.run(&mut Tally::default());
            (outcome, simulation.battle().clock())
        };

        assert_eq!(run(11), run(11));
    }

    #[test]
    fn unknown_encounter_is_rejected() {
        let err = Simulation::load(&bundled(0, "nowhere")).err().unwrap();
        assert!(err.to_string().contains("Unknown encounter 'nowhere'"));
    }
}
