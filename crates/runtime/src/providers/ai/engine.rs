//! The layered decision procedure.
//!
//! Stages run in a fixed order and each later stage is consulted only while
//! the resolver is still empty:
//!
//! 1. local candidates (adjacent tiles plus the health check)
//! 2. one long-range goal
//! 3. the fallback chain, in table order
//!
//! Nothing here keeps state between calls; two calls on the same snapshot
//! return the same answer.

use arena_core::{ArenaEnv, Direction, GameState, HeroAiConfig};

use super::AiContext;
use super::fallback::FALLBACK_CHAIN;
use super::local::LocalIntentGenerator;
use super::long_range::LongRangeGoalFinder;
use super::resolver::PrecedenceResolver;
use super::types::Decision;

/// Decides a move for `state.active_hero` with explicit thresholds.
///
/// Returns `None` when no stage produced a direction; hosts map that to
/// [`Move::Stay`](arena_core::Move::Stay).
pub fn decide(state: &GameState, env: &ArenaEnv<'_>, config: &HeroAiConfig) -> Option<Decision> {
    let ctx = AiContext::new(state, *env, config);
    let mut resolver = PrecedenceResolver::new();

    resolver.consider_all(LocalIntentGenerator::generate(&ctx));
    if resolver.is_resolved() {
        tracing::debug!(hero = %ctx.hero.id, decision = ?resolver.decision(), "resolved locally");
        return resolver.decision();
    }

    if let Some(candidate) = LongRangeGoalFinder::find(&ctx) {
        resolver.consider_candidate(candidate);
    }
    if resolver.is_resolved() {
        tracing::debug!(hero = %ctx.hero.id, decision = ?resolver.decision(), "resolved by long-range goal");
        return resolver.decision();
    }

    for (intent, query) in FALLBACK_CHAIN {
        if resolver.consider(intent, query(&ctx).map(|path| path.direction)) {
            break;
        }
    }

    tracing::debug!(hero = %ctx.hero.id, decision = ?resolver.decision(), "fallback chain finished");
    resolver.decision()
}

/// Decides with the default thresholds and drops the intent.
pub fn decide_move(state: &GameState, env: &ArenaEnv<'_>) -> Option<Direction> {
    decide(state, env, &HeroAiConfig::default()).map(|decision| decision.direction)
}
