//! Error types surfaced by the runtime API.
//!
//! The decision engine itself cannot fail; these cover the lookups around it
//! (which hero, which strategy) and board assembly failures bubbled up from
//! `arena-core`.
use arena_core::{BoardError, GameError, HeroId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("hero {0} is not part of this scenario")]
    UnknownHero(HeroId),

    #[error("hero {0} is dead and cannot move")]
    DeadHero(HeroId),

    #[error("unknown strategy `{name}`")]
    UnknownStrategy { name: String },

    #[error(transparent)]
    Board(#[from] BoardError),
}

impl GameError for RuntimeError {
    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::UnknownHero(_) => "RUNTIME_UNKNOWN_HERO",
            RuntimeError::DeadHero(_) => "RUNTIME_DEAD_HERO",
            RuntimeError::UnknownStrategy { .. } => "RUNTIME_UNKNOWN_STRATEGY",
            RuntimeError::Board(err) => err.error_code(),
        }
    }
}
