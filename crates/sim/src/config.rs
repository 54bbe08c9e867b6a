//! Simulation settings read from the environment.
use std::env;
use std::path::PathBuf;

/// Headless run configuration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Directory holding `config.toml`, `enemies.ron` and the other data files.
    pub data_dir: PathBuf,
    /// Encounter id to fight. `None` picks the first listed encounter.
    pub encounter: Option<String>,
    pub seed: u64,
    /// Simulated frames per second; each tick advances `1 / fps` seconds.
    pub fps: u32,
    /// Simulated time after which the run gives up.
    pub max_seconds: f64,
    /// Directory for a log file copy. `None` logs to stderr only.
    pub log_dir: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data")),
            encounter: None,
            seed: 0,
            fps: 30,
            max_seconds: 600.0,
            log_dir: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BATTLE_SIM_DATA_DIR` - Content directory (default: the crate's `data/`)
    /// - `BATTLE_SIM_ENCOUNTER` - Encounter id (default: first encounter)
    /// - `BATTLE_SIM_SEED` - Battle seed (default: 0)
    /// - `BATTLE_SIM_FPS` - Frames per simulated second (default: 30)
    /// - `BATTLE_SIM_MAX_SECONDS` - Simulated time limit (default: 600)
    /// - `BATTLE_SIM_LOG_DIR` - Also write logs to `battle-sim.log` in this directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("BATTLE_SIM_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(encounter) = env::var("BATTLE_SIM_ENCOUNTER")
            && !encounter.is_empty()
        {
            config.encounter = Some(encounter);
        }
        if let Some(seed) = read_env::<u64>("BATTLE_SIM_SEED") {
            config.seed = seed;
        }
        if let Some(fps) = read_env::<u32>("BATTLE_SIM_FPS") {
            config.fps = fps.clamp(1, 1000);
        }
        if let Some(limit) = read_env::<f64>("BATTLE_SIM_MAX_SECONDS")
            && limit.is_finite()
            && limit > 0.0
        {
            config.max_seconds = limit;
        }
        config.log_dir = env::var_os("BATTLE_SIM_LOG_DIR").map(PathBuf::from);

        config
    }

    /// Seconds advanced by each tick.
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.fps as f32
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
