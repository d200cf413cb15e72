//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the engine modules can stay focused on deciding moves.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{MoveProvider, StayProvider, StrategyProvider};
