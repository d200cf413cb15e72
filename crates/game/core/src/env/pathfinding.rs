use std::collections::VecDeque;

use super::BoardQuery;
use crate::action::Direction;
use crate::state::{Position, Tile};

/// Result of a nearest-object search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathInfo {
    /// First step to take from the origin.
    pub direction: Direction,
    /// Number of steps to reach the target.
    pub distance: u32,
    /// Where the matching tile is.
    pub target: Position,
}

/// Nearest-object search over a board.
pub trait Pathfinder: Send + Sync {
    /// Finds the closest tile satisfying `predicate`, walking from `origin`.
    ///
    /// Returns `None` when nothing reachable matches. The origin tile itself is
    /// never tested.
    fn find_nearest(
        &self,
        board: &dyn BoardQuery,
        origin: Position,
        predicate: &dyn Fn(&Tile) -> bool,
    ) -> Option<PathInfo>;
}

/// Breadth-first nearest-object search.
///
/// Neighbors are expanded in [`Direction::ALL`] order, so among equally close
/// targets the one reached through the earliest direction wins. Every tile
/// reached is tested against the predicate, but only empty ground is walked
/// through: heroes, mines, wells, and rocks end a path.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstPathfinder;

impl Pathfinder for BreadthFirstPathfinder {
    fn find_nearest(
        &self,
        board: &dyn BoardQuery,
        origin: Position,
        predicate: &dyn Fn(&Tile) -> bool,
    ) -> Option<PathInfo> {
        let dimensions = board.dimensions();
        if !dimensions.contains(origin) {
            return None;
        }

        let width = dimensions.width as usize;
        let index = |p: Position| p.row as usize * width + p.col as usize;
        let mut visited = vec![false; width * dimensions.height as usize];
        visited[index(origin)] = true;

        // (position, first step taken from the origin, distance)
        let mut queue: VecDeque<(Position, Option<Direction>, u32)> = VecDeque::new();
        queue.push_back((origin, None, 0));

        while let Some((position, first_step, distance)) = queue.pop_front() {
            for direction in Direction::ALL {
                let next = position.step(direction);
                if !dimensions.contains(next) || visited[index(next)] {
                    continue;
                }
                visited[index(next)] = true;

                let tile = board.tile(next);
                let first_step = first_step.unwrap_or(direction);
                if predicate(&tile) {
                    return Some(PathInfo {
                        direction: first_step,
                        distance: distance + 1,
                        target: next,
                    });
                }
                if tile.is_traversable() {
                    queue.push_back((next, Some(first_step), distance + 1));
                }
            }
        }

        None
    }
}
