//! Per-turn snapshot of the arena.
//!
//! This module owns the data structures handed to a strategy each turn: the
//! board with its tiles, the heroes standing on it, and the [`GameState`]
//! wrapper naming which hero is deciding. Nothing here survives a turn from
//! the engine's point of view; the host rebuilds the snapshot every time.
mod board;
mod common;
mod hero;
mod tile;

pub use board::{Board, BoardDimensions};
pub use common::{HeroId, Position, TeamId};
pub use hero::HeroState;
pub use tile::{MineOwner, SubKind, Tile, TileKind};

use crate::error::BoardError;

/// Everything a strategy sees for a single decision.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Zero-based turn counter supplied by the host.
    pub turn: u32,
    /// The hero whose move is being decided.
    pub active_hero: HeroState,
    /// Board snapshot; read only through [`crate::BoardQuery`].
    pub board: Board,
}

impl GameState {
    pub fn new(turn: u32, active_hero: HeroState, board: Board) -> Self {
        Self {
            turn,
            active_hero,
            board,
        }
    }

    /// Builds the snapshot for a hero already placed on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownHero`] if no living hero with `id` stands on
    /// the board.
    pub fn for_hero(board: Board, id: HeroId, turn: u32) -> Result<Self, BoardError> {
        let active_hero = board.hero(id).cloned().ok_or(BoardError::UnknownHero(id))?;
        Ok(Self::new(turn, active_hero, board))
    }
}
