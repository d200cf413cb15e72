//! Collaborator seams consumed by strategies.
//!
//! The decision engine never touches a [`Board`](crate::Board) directly. It
//! asks a [`BoardQuery`] for tiles and a [`Pathfinder`] for nearest-object
//! searches. [`ArenaEnv`] bundles both so the engine can be pointed at any
//! implementation, and exposes the named search wrappers strategies use.
mod map;
mod pathfinding;
mod rng;

pub use map::BoardQuery;
pub use pathfinding::{BreadthFirstPathfinder, PathInfo, Pathfinder};
pub use rng::{PcgRng, compute_seed};

use crate::action::Direction;
use crate::state::{HeroState, Position, Tile};

/// Read-only collaborators available to a strategy for one decision.
#[derive(Clone, Copy)]
pub struct ArenaEnv<'a> {
    board: &'a dyn BoardQuery,
    pathfinder: &'a dyn Pathfinder,
}

impl<'a> ArenaEnv<'a> {
    pub fn new(board: &'a dyn BoardQuery, pathfinder: &'a dyn Pathfinder) -> Self {
        Self { board, pathfinder }
    }

    pub fn tile(&self, position: Position) -> Tile {
        self.board.tile(position)
    }

    pub fn tile_nearby(&self, position: Position, direction: Direction) -> Tile {
        self.board.tile_nearby(position, direction)
    }

    /// Generic nearest-object search from `origin`.
    pub fn find_nearest(
        &self,
        origin: Position,
        predicate: &dyn Fn(&Tile) -> bool,
    ) -> Option<PathInfo> {
        self.pathfinder.find_nearest(self.board, origin, predicate)
    }

    pub fn nearest_health_well(&self, hero: &HeroState) -> Option<PathInfo> {
        self.find_nearest(hero.position, &|tile| tile.is_health_well())
    }

    /// Nearest hero on another team.
    pub fn nearest_enemy(&self, hero: &HeroState) -> Option<PathInfo> {
        self.find_nearest(hero.position, &|tile| {
            tile.hero().is_some_and(|other| other.is_enemy_of(hero))
        })
    }

    /// Nearest enemy with strictly less health than `hero`.
    pub fn nearest_weaker_enemy(&self, hero: &HeroState) -> Option<PathInfo> {
        self.find_nearest(hero.position, &|tile| {
            tile.hero()
                .is_some_and(|other| other.is_enemy_of(hero) && other.health < hero.health)
        })
    }

    pub fn nearest_team_member(&self, hero: &HeroState) -> Option<PathInfo> {
        self.find_nearest(hero.position, &|tile| {
            tile.hero().is_some_and(|other| other.is_teammate_of(hero))
        })
    }

    /// Nearest mine that is unowned or owned by another team.
    pub fn nearest_non_team_diamond_mine(&self, hero: &HeroState) -> Option<PathInfo> {
        self.find_nearest(hero.position, &|tile| match tile.mine_owner() {
            Some(Some(owner)) => owner.team != hero.team,
            Some(None) => true,
            None => false,
        })
    }

    /// Nearest mine not owned by `hero` itself (teammates' mines included).
    pub fn nearest_unowned_diamond_mine(&self, hero: &HeroState) -> Option<PathInfo> {
        self.find_nearest(hero.position, &|tile| match tile.mine_owner() {
            Some(Some(owner)) => owner.id != hero.id,
            Some(None) => true,
            None => false,
        })
    }
}

impl core::fmt::Debug for ArenaEnv<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArenaEnv")
            .field("dimensions", &self.board.dimensions())
            .finish_non_exhaustive()
    }
}
