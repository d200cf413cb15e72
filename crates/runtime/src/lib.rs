//! Move decision runtime for arena heroes.
//!
//! This crate turns a per-turn [`arena_core::GameState`] snapshot into a
//! [`arena_core::Move`]. Consumers pick a [`Strategy`], wrap it in a
//! [`StrategyProvider`], and call it once per hero per turn.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider trait and error types
//! - [`providers`] hosts the decision engine and the preset strategies
//! - [`runtime`] builds per-hero snapshots and dispatches to a provider
pub mod api;
pub mod providers;
pub mod runtime;

pub use api::{MoveProvider, Result, RuntimeError, StayProvider, StrategyProvider};
pub use providers::ai::{
    Candidate, Decision, Intent, PrecedenceResolver, Strategy, decide, decide_move,
};
pub use runtime::{decide_for, living_heroes, select_heroes};
