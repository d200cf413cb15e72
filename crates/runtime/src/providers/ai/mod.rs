//! Intent-precedence AI for arena heroes.
//!
//! The main strategy ("helpful opportunist") decides a move in layers:
//!
//! 1. **Local intents**: classify the four adjacent tiles and emit
//!    `(intent, direction)` candidates, plus `GetHealthy` when wounded
//! 2. **Long-range goal**: only if nothing local resolved, search the whole
//!    board for a weaker enemy or a capturable mine
//! 3. **Fallback chain**: only if still unresolved, walk toward a teammate,
//!    then toward any enemy
//!
//! Every candidate is folded through a [`PrecedenceResolver`]: the lowest
//! [`Intent::rank`] wins, and equal ranks keep whichever arrived first.
//!
//! # Core Components
//!
//! - [`AiContext`]: per-decision blackboard with the once-per-turn searches
//! - [`Neighborhood`] and [`classify`]: adjacency scan and tile classification
//! - [`LocalIntentGenerator`], [`LongRangeGoalFinder`], [`FALLBACK_CHAIN`]
//! - [`decide`] / [`decide_move`]: the engine entry points
//! - [`Strategy`]: the engine plus simpler preset strategies

pub mod context;
pub mod engine;
pub mod fallback;
pub mod local;
pub mod long_range;
pub mod neighborhood;
pub mod presets;
pub mod resolver;
pub mod types;

pub use context::AiContext;
pub use engine::{decide, decide_move};
pub use fallback::{FALLBACK_CHAIN, FallbackQuery};
pub use local::{LocalCandidates, LocalIntentGenerator};
pub use long_range::LongRangeGoalFinder;
pub use neighborhood::{Neighborhood, TileClass, classify, is_adjacent_to_health_well};
pub use presets::Strategy;
pub use resolver::PrecedenceResolver;
pub use types::{Candidate, Decision, Intent};
