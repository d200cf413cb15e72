//! Per-decision context shared by every stage of the engine.
//!
//! [`AiContext`] is the blackboard for one hero's decision. It borrows the
//! snapshot and collaborators for the duration of a single call and owns
//! nothing that outlives it, so concurrent decisions for different heroes
//! never share mutable state.

use arena_core::{ArenaEnv, GameState, HeroAiConfig, HeroState, PathInfo, Tile};

use super::neighborhood::{self, Neighborhood};

/// Context for one move decision.
///
/// # Caching Strategy
///
/// The nearest health well and nearest enemy are each searched exactly once,
/// when the context is built, and reused by every rule that mentions them.
pub struct AiContext<'a> {
    /// The hero making the decision.
    pub hero: &'a HeroState,

    /// Full snapshot handed in by the host.
    pub state: &'a GameState,

    /// Board query service and pathfinder.
    pub env: ArenaEnv<'a>,

    /// Thresholds in effect for this decision.
    pub config: &'a HeroAiConfig,

    nearest_health_well: Option<PathInfo>,
    nearest_enemy: Option<PathInfo>,
}

impl<'a> AiContext<'a> {
    pub fn new(state: &'a GameState, env: ArenaEnv<'a>, config: &'a HeroAiConfig) -> Self {
        let hero = &state.active_hero;
        let nearest_health_well = env.nearest_health_well(hero);
        let nearest_enemy = env.nearest_enemy(hero);

        tracing::trace!(
            hero = %hero.id,
            well = ?nearest_health_well,
            enemy = ?nearest_enemy,
            "AiContext: global searches done"
        );

        Self {
            hero,
            state,
            env,
            config,
            nearest_health_well,
            nearest_enemy,
        }
    }

    pub fn health(&self) -> u32 {
        self.hero.health
    }

    pub fn nearest_health_well(&self) -> Option<PathInfo> {
        self.nearest_health_well
    }

    pub fn nearest_enemy(&self) -> Option<PathInfo> {
        self.nearest_enemy
    }

    /// Scans the four tiles around the deciding hero.
    pub fn neighborhood(&self) -> Neighborhood {
        Neighborhood::scan(&self.env, self.hero.position)
    }

    /// Whether `tile` has a health well among its own four neighbors.
    pub fn is_adjacent_to_health_well(&self, tile: &Tile) -> bool {
        neighborhood::is_adjacent_to_health_well(&self.env, tile)
    }
}
