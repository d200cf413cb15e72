/// One of the four cardinal steps a hero can take.
///
/// Rows grow southwards and columns grow eastwards, so `North` decrements the
/// row and `West` decrements the column.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Scan order used everywhere a neighborhood is walked.
    ///
    /// Equal-precedence candidates are resolved first-seen-wins, so this order
    /// is part of the decision contract and must not change.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(row, col)` offset of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// The literal answer returned to the host for a turn.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Move {
    North,
    East,
    South,
    West,
    #[default]
    Stay,
}

impl Move {
    /// Parses a host answer, treating anything unrecognized as `Stay`.
    pub fn from_host(answer: &str) -> Move {
        answer.parse().unwrap_or(Move::Stay)
    }
}

impl From<Direction> for Move {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Move::North,
            Direction::East => Move::East,
            Direction::South => Move::South,
            Direction::West => Move::West,
        }
    }
}

impl From<Option<Direction>> for Move {
    fn from(direction: Option<Direction>) -> Self {
        direction.map_or(Move::Stay, Move::from)
    }
}
