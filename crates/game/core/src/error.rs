//! Common error infrastructure for arena-core.
//!
//! The decision engine itself never fails: missing tiles degrade to
//! [`TileKind::OutOfBounds`](crate::TileKind::OutOfBounds) and absent search
//! results simply produce no candidate. Errors only arise while building or
//! querying a [`Board`](crate::Board) snapshot from external data.

use crate::state::{HeroId, Position};

/// Common trait for all arena-core errors.
///
/// Error codes are stable identifiers suitable for logs and tests.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while assembling a board snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoardError {
    #[error("board dimensions must be non-zero, got {width}x{height}")]
    EmptyBoard { width: u32, height: u32 },

    #[error("position {0} is outside the board")]
    OutOfBounds(Position),

    #[error("tile {0} is already occupied")]
    Occupied(Position),

    #[error("hero {0} is already on the board")]
    DuplicateHero(HeroId),

    #[error("hero {0} is not on the board")]
    UnknownHero(HeroId),

    #[error("hero {0} is dead and cannot be placed")]
    DeadHero(HeroId),
}

impl GameError for BoardError {
    fn error_code(&self) -> &'static str {
        use BoardError::*;
        match self {
            EmptyBoard { .. } => "BOARD_EMPTY",
            OutOfBounds(_) => "BOARD_OUT_OF_BOUNDS",
            Occupied(_) => "BOARD_OCCUPIED",
            DuplicateHero(_) => "BOARD_DUPLICATE_HERO",
            UnknownHero(_) => "BOARD_UNKNOWN_HERO",
            DeadHero(_) => "BOARD_DEAD_HERO",
        }
    }
}
