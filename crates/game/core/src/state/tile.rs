use super::{HeroId, HeroState, Position, TeamId};

/// Secondary marker on an otherwise empty tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SubKind {
    /// Remains of a fallen hero; walking over them is worth a little.
    Bones,
}

/// Owner reference carried by a diamond mine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MineOwner {
    pub id: HeroId,
    pub team: TeamId,
    pub dead: bool,
}

impl MineOwner {
    pub fn of(hero: &HeroState) -> Self {
        Self {
            id: hero.id,
            team: hero.team,
            dead: hero.dead,
        }
    }
}

/// What occupies a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Empty,
    /// Rock; nothing can enter it.
    Impassable,
    Hero(HeroState),
    DiamondMine { owner: Option<MineOwner> },
    HealthWell,
    /// Sentinel for coordinates outside the board. Matches no predicate.
    OutOfBounds,
}

/// A resolved board query: the coordinate asked for and what is there.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub position: Position,
    pub kind: TileKind,
    pub sub_kind: Option<SubKind>,
}

impl Tile {
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self {
            position,
            kind,
            sub_kind: None,
        }
    }

    pub fn out_of_bounds(position: Position) -> Self {
        Self::new(position, TileKind::OutOfBounds)
    }

    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, TileKind::OutOfBounds)
    }

    pub fn is_health_well(&self) -> bool {
        matches!(self.kind, TileKind::HealthWell)
    }

    /// Only empty ground (bones included) can be walked through.
    pub fn is_traversable(&self) -> bool {
        matches!(self.kind, TileKind::Empty)
    }

    pub fn has_bones(&self) -> bool {
        matches!(self.kind, TileKind::Empty) && self.sub_kind == Some(SubKind::Bones)
    }

    pub fn hero(&self) -> Option<&HeroState> {
        match &self.kind {
            TileKind::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    /// Returns `Some(owner)` for diamond mines and `None` for anything else.
    pub fn mine_owner(&self) -> Option<Option<&MineOwner>> {
        match &self.kind {
            TileKind::DiamondMine { owner } => Some(owner.as_ref()),
            _ => None,
        }
    }
}
