//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so an empty file yields
    /// [`BattleConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.decision_delay_min_ms > config.decision_delay_max_ms {
            anyhow::bail!(
                "decision_delay_min_ms ({}) exceeds decision_delay_max_ms ({})",
                config.decision_delay_min_ms,
                config.decision_delay_max_ms
            );
        }
        if !(config.gauge_max.is_finite() && config.gauge_max > 0.0) {
            anyhow::bail!("gauge_max must be positive, got {}", config.gauge_max);
        }
        if config.unarmed_variance.min > config.unarmed_variance.max {
            anyhow::bail!("unarmed_variance.min exceeds unarmed_variance.max");
        }

        Ok(config)
    }
}
