//! Board model and collaborator contracts for the hero arena.
//!
//! `arena-core` defines the canonical snapshot types (heroes, tiles, board)
//! plus the two collaborator seams consumed by the move-decision engine:
//! [`BoardQuery`] resolves coordinates to tiles and [`Pathfinder`] runs the
//! nearest-object search. [`ArenaEnv`] bundles both together with the named
//! search wrappers so callers never pass raw predicates around.
pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod state;

pub use action::{Direction, Move};
pub use config::HeroAiConfig;
pub use env::{
    ArenaEnv, BoardQuery, BreadthFirstPathfinder, PathInfo, Pathfinder, PcgRng, compute_seed,
};
pub use error::{BoardError, GameError};
pub use state::{
    Board, BoardDimensions, GameState, HeroId, HeroState, MineOwner, Position, SubKind, TeamId,
    Tile, TileKind,
};
