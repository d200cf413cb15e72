//! Data-driven arena content.
//!
//! This crate turns files on disk into `arena-core` values:
//! - Scenario snapshots (board layout, heroes, turn) from RON
//! - Decision thresholds ([`arena_core::HeroAiConfig`]) from TOML
//!
//! Content is consumed by hosts before a turn is decided and never reaches
//! into the decision engine itself.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, Scenario, ScenarioLoader};
