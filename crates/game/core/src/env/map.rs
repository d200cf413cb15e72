use crate::action::Direction;
use crate::state::{Board, BoardDimensions, Position, Tile};

/// Board query service: resolves coordinates to tiles.
///
/// Implementations never fail. Coordinates outside the board must resolve to
/// [`TileKind::OutOfBounds`](crate::TileKind::OutOfBounds) rather than an
/// error or a missing value.
pub trait BoardQuery: Send + Sync {
    fn dimensions(&self) -> BoardDimensions;

    fn tile(&self, position: Position) -> Tile;

    /// The tile one step from `position` in `direction`.
    fn tile_nearby(&self, position: Position, direction: Direction) -> Tile {
        self.tile(position.step(direction))
    }
}

impl BoardQuery for Board {
    fn dimensions(&self) -> BoardDimensions {
        Board::dimensions(self)
    }

    fn tile(&self, position: Position) -> Tile {
        Board::tile(self, position)
    }
}
