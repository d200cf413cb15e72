//! Abstraction for sourcing a hero's move each turn.
//!
//! Hosts plug in [`MoveProvider`] implementations so the same dispatch code can
//! run the intent engine, a preset archetype, or a fixed test fixture.
use std::str::FromStr;

use arena_core::{ArenaEnv, GameState, HeroAiConfig, Move};

use super::errors::{Result, RuntimeError};
use crate::providers::ai::Strategy;

/// Trait for providing a move for `state.active_hero`.
///
/// Implementations must be pure in their inputs: the runtime may call them
/// for several heroes at once from different threads.
pub trait MoveProvider: Send + Sync {
    fn provide_move(&self, state: &GameState, env: &ArenaEnv<'_>) -> Move;
}

/// Runs one [`Strategy`] with a fixed set of thresholds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrategyProvider {
    strategy: Strategy,
    config: HeroAiConfig,
}

impl StrategyProvider {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            config: HeroAiConfig::default(),
        }
    }

    /// Looks a strategy up by its snake_case name.
    pub fn named(name: &str) -> Result<Self> {
        let strategy = Strategy::from_str(name).map_err(|_| RuntimeError::UnknownStrategy {
            name: name.to_owned(),
        })?;
        Ok(Self::new(strategy))
    }

    pub fn with_config(mut self, config: HeroAiConfig) -> Self {
        self.config = config;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &HeroAiConfig {
        &self.config
    }
}

impl MoveProvider for StrategyProvider {
    fn provide_move(&self, state: &GameState, env: &ArenaEnv<'_>) -> Move {
        Move::from(self.strategy.decide(state, env, &self.config))
    }
}

/// A provider that never moves. Useful for testing or as a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct StayProvider;

impl MoveProvider for StayProvider {
    fn provide_move(&self, _state: &GameState, _env: &ArenaEnv<'_>) -> Move {
        Move::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_resolves_snake_case() {
        let provider = StrategyProvider::named("safe_diamond_miner").unwrap();
        assert_eq!(provider.strategy(), Strategy::SafeDiamondMiner);
        assert_eq!(provider.config(), &HeroAiConfig::default());
    }

    #[test]
    fn named_rejects_unknown_names() {
        let err = StrategyProvider::named("balanced").unwrap_err();
        assert!(matches!(err, RuntimeError::UnknownStrategy { ref name } if name == "balanced"));
        assert_eq!(err.to_string(), "unknown strategy `balanced`");
    }
}
