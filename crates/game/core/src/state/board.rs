use super::{HeroId, HeroState, MineOwner, Position, SubKind, Tile, TileKind};
use crate::error::BoardError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardDimensions {
    /// Number of columns.
    pub width: u32,
    /// Number of rows.
    pub height: u32,
}

impl BoardDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row >= 0
            && position.col >= 0
            && position.row < self.height as i32
            && position.col < self.width as i32
    }

    fn index(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row as usize * self.width as usize + position.col as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Cell {
    kind: TileKind,
    sub_kind: Option<SubKind>,
}

impl Cell {
    const EMPTY: Self = Self {
        kind: TileKind::Empty,
        sub_kind: None,
    };
}

/// Dense row-major tile grid.
///
/// The board only enforces placement sanity (bounds, one occupant per tile,
/// unique hero ids). It makes no claims about game rules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    dimensions: BoardDimensions,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an all-empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyBoard`] when either dimension is zero.
    pub fn new(dimensions: BoardDimensions) -> Result<Self, BoardError> {
        if dimensions.width == 0 || dimensions.height == 0 {
            return Err(BoardError::EmptyBoard {
                width: dimensions.width,
                height: dimensions.height,
            });
        }
        let len = dimensions.width as usize * dimensions.height as usize;
        Ok(Self {
            dimensions,
            cells: vec![Cell::EMPTY; len],
        })
    }

    /// Square board, the usual arena shape.
    pub fn square(size: u32) -> Result<Self, BoardError> {
        Self::new(BoardDimensions::new(size, size))
    }

    pub fn dimensions(&self) -> BoardDimensions {
        self.dimensions
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    /// Resolves a coordinate; anything off the board is [`TileKind::OutOfBounds`].
    pub fn tile(&self, position: Position) -> Tile {
        match self.dimensions.index(position) {
            Some(index) => {
                let cell = &self.cells[index];
                Tile {
                    position,
                    kind: cell.kind.clone(),
                    sub_kind: cell.sub_kind,
                }
            }
            None => Tile::out_of_bounds(position),
        }
    }

    /// Places a living hero at its own position.
    pub fn place_hero(&mut self, hero: HeroState) -> Result<&mut Self, BoardError> {
        if hero.dead {
            return Err(BoardError::DeadHero(hero.id));
        }
        if self.hero(hero.id).is_some() {
            return Err(BoardError::DuplicateHero(hero.id));
        }
        let position = hero.position;
        self.occupy(position, TileKind::Hero(hero))
    }

    pub fn place_mine(
        &mut self,
        position: Position,
        owner: Option<MineOwner>,
    ) -> Result<&mut Self, BoardError> {
        self.occupy(position, TileKind::DiamondMine { owner })
    }

    pub fn place_health_well(&mut self, position: Position) -> Result<&mut Self, BoardError> {
        self.occupy(position, TileKind::HealthWell)
    }

    pub fn place_impassable(&mut self, position: Position) -> Result<&mut Self, BoardError> {
        self.occupy(position, TileKind::Impassable)
    }

    /// Marks an empty tile as holding bones.
    pub fn place_bones(&mut self, position: Position) -> Result<&mut Self, BoardError> {
        let cell = self.empty_cell_mut(position)?;
        cell.sub_kind = Some(SubKind::Bones);
        Ok(self)
    }

    /// Finds a living hero on the board by id.
    pub fn hero(&self, id: HeroId) -> Option<&HeroState> {
        self.heroes().find(|hero| hero.id == id)
    }

    /// All heroes on the board in row-major order.
    pub fn heroes(&self) -> impl Iterator<Item = &HeroState> {
        self.cells.iter().filter_map(|cell| match &cell.kind {
            TileKind::Hero(hero) => Some(hero),
            _ => None,
        })
    }

    fn occupy(&mut self, position: Position, kind: TileKind) -> Result<&mut Self, BoardError> {
        let cell = self.empty_cell_mut(position)?;
        cell.kind = kind;
        Ok(self)
    }

    fn empty_cell_mut(&mut self, position: Position) -> Result<&mut Cell, BoardError> {
        let index = self
            .dimensions
            .index(position)
            .ok_or(BoardError::OutOfBounds(position))?;
        let cell = &mut self.cells[index];
        if cell.kind != TileKind::Empty {
            return Err(BoardError::Occupied(position));
        }
        Ok(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TeamId;

    fn hero(id: u32, row: i32, col: i32) -> HeroState {
        HeroState::new(HeroId(id), format!("hero-{id}"), TeamId(0), Position::new(row, col))
    }

    #[test]
    fn rejects_zero_sized_board() {
        assert_eq!(
            Board::new(BoardDimensions::new(0, 3)),
            Err(BoardError::EmptyBoard {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn off_board_queries_resolve_to_sentinel() {
        let board = Board::square(3).unwrap();
        assert!(board.tile(Position::new(-1, 0)).is_out_of_bounds());
        assert!(board.tile(Position::new(0, 3)).is_out_of_bounds());
        assert!(board.tile(Position::new(3, 0)).is_out_of_bounds());
        assert_eq!(board.tile(Position::new(2, 2)).kind, TileKind::Empty);
    }

    #[test]
    fn placement_is_row_major() {
        let mut board = Board::new(BoardDimensions::new(4, 2)).unwrap();
        board.place_health_well(Position::new(1, 3)).unwrap();
        assert!(board.tile(Position::new(1, 3)).is_health_well());
        assert!(!board.tile(Position::new(0, 3)).is_health_well());
    }

    #[test]
    fn rejects_double_occupancy() {
        let mut board = Board::square(3).unwrap();
        board.place_hero(hero(1, 1, 1)).unwrap();
        assert_eq!(
            board.place_health_well(Position::new(1, 1)).unwrap_err(),
            BoardError::Occupied(Position::new(1, 1))
        );
        assert_eq!(
            board.place_hero(hero(1, 0, 0)).unwrap_err(),
            BoardError::DuplicateHero(HeroId(1))
        );
    }

    #[test]
    fn dead_heroes_stay_off_the_board() {
        let mut board = Board::square(3).unwrap();
        let err = board.place_hero(hero(4, 0, 0).with_dead(true)).unwrap_err();
        assert_eq!(err, BoardError::DeadHero(HeroId(4)));
        assert!(board.hero(HeroId(4)).is_none());
    }

    #[test]
    fn bones_only_on_empty_ground() {
        let mut board = Board::square(3).unwrap();
        board.place_bones(Position::new(0, 1)).unwrap();
        assert!(board.tile(Position::new(0, 1)).has_bones());

        board.place_impassable(Position::new(2, 2)).unwrap();
        assert_eq!(
            board.place_bones(Position::new(2, 2)).unwrap_err(),
            BoardError::Occupied(Position::new(2, 2))
        );
    }

    #[test]
    fn lookup_hero_by_id() {
        let mut board = Board::square(4).unwrap();
        board
            .place_hero(hero(1, 0, 0))
            .unwrap()
            .place_hero(hero(2, 3, 3))
            .unwrap();
        assert_eq!(board.hero(HeroId(2)).unwrap().position, Position::new(3, 3));
        assert_eq!(board.heroes().count(), 2);
    }
}
