//! Decision threshold loader.

use std::path::Path;

use arena_core::HeroAiConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`HeroAiConfig`] from TOML files.
///
/// Missing keys keep their defaults, so a file only lists what it changes:
///
/// ```toml
/// finish_enemy_health = 40
/// rest_health = 70
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<HeroAiConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<HeroAiConfig> {
        let config: HeroAiConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.rest_health > config.full_health {
            anyhow::bail!(
                "rest_health ({}) cannot exceed full_health ({})",
                config.rest_health,
                config.full_health
            );
        }
        if config.confront_distance_factor > HeroAiConfig::MAX_CONFRONT_DISTANCE_FACTOR {
            anyhow::bail!(
                "confront_distance_factor ({}) cannot exceed {}",
                config.confront_distance_factor,
                HeroAiConfig::MAX_CONFRONT_DISTANCE_FACTOR
            );
        }
        Ok(config)
    }
}
