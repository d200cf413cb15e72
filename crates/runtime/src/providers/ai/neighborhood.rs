//! Tile classification and the four-way neighborhood scan.

use arena_core::{ArenaEnv, Direction, HeroState, MineOwner, Position, Tile, TileKind};

/// How a tile looks from the deciding hero's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileClass<'t> {
    Friend(&'t HeroState),
    Enemy(&'t HeroState),
    DiamondMine { owner: Option<&'t MineOwner> },
    HealthWell,
    Grave,
    /// Empty ground, and anything else that offers no intent (rocks).
    Empty,
    OutOfBounds,
}

/// Classifies `tile` relative to `me`. Never fails.
pub fn classify<'t>(tile: &'t Tile, me: &HeroState) -> TileClass<'t> {
    match &tile.kind {
        TileKind::Hero(hero) if hero.is_teammate_of(me) => TileClass::Friend(hero),
        TileKind::Hero(hero) => TileClass::Enemy(hero),
        TileKind::DiamondMine { owner } => TileClass::DiamondMine {
            owner: owner.as_ref(),
        },
        TileKind::HealthWell => TileClass::HealthWell,
        TileKind::Empty if tile.has_bones() => TileClass::Grave,
        TileKind::Empty | TileKind::Impassable => TileClass::Empty,
        TileKind::OutOfBounds => TileClass::OutOfBounds,
    }
}

/// The four tiles around a position, one per [`Direction`].
///
/// Always holds exactly four entries; edges show up as out-of-bounds tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    tiles: [Tile; 4],
}

impl Neighborhood {
    pub const LEN: usize = Direction::ALL.len();

    pub fn scan(env: &ArenaEnv<'_>, position: Position) -> Self {
        Self {
            tiles: Direction::ALL.map(|direction| env.tile_nearby(position, direction)),
        }
    }

    /// Tiles paired with their direction, in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &Tile)> {
        Direction::ALL.into_iter().zip(self.tiles.iter())
    }

    pub fn has_health_well(&self) -> bool {
        self.tiles.iter().any(Tile::is_health_well)
    }
}

/// True iff one of the four tiles around `tile` (not around the hero) is a
/// health well. Out-of-bounds tiles have no neighbors and never qualify.
pub fn is_adjacent_to_health_well(env: &ArenaEnv<'_>, tile: &Tile) -> bool {
    if tile.is_out_of_bounds() {
        return false;
    }
    Neighborhood::scan(env, tile.position).has_health_well()
}
