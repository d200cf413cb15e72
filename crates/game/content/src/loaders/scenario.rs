//! Scenario loader.
//!
//! A scenario is one turn's snapshot of the arena written by hand or dumped by
//! a host. Heroes are listed once with their team and health; mines refer to
//! their owner by hero id. Dead heroes stay in the roster (they can still own
//! mines) but are never placed on the board.

use std::collections::HashMap;
use std::path::Path;

use arena_core::{Board, BoardDimensions, HeroId, HeroState, MineOwner, Position, TeamId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRon {
    #[serde(default)]
    turn: u32,
    dimensions: (u32, u32), // (width, height)
    heroes: Vec<HeroRon>,
    #[serde(default)]
    mines: Vec<MineRon>,
    #[serde(default)]
    health_wells: Vec<SpotRon>,
    #[serde(default)]
    bones: Vec<SpotRon>,
    #[serde(default)]
    impassable: Vec<SpotRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HeroRon {
    id: u32,
    name: String,
    team: u32,
    row: i32,
    col: i32,
    #[serde(default = "full_health")]
    health: u32,
    #[serde(default)]
    dead: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct MineRon {
    row: i32,
    col: i32,
    #[serde(default)]
    owner: Option<u32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SpotRon {
    row: i32,
    col: i32,
}

impl SpotRon {
    fn position(self) -> Position {
        Position::new(self.row, self.col)
    }
}

fn full_health() -> u32 {
    HeroState::MAX_HEALTH
}

/// A loaded snapshot: the board plus everything the board cannot hold.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub turn: u32,
    pub board: Board,
    /// Every hero in file order, the dead included.
    pub roster: Vec<HeroState>,
}

impl Scenario {
    pub fn hero(&self, id: HeroId) -> Option<&HeroState> {
        self.roster.iter().find(|hero| hero.id == id)
    }
}

/// Loader for [`Scenario`] snapshots from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid scenario {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;
        Self::build(data)
    }

    fn build(data: ScenarioRon) -> LoadResult<Scenario> {
        let (width, height) = data.dimensions;
        let mut board = Board::new(BoardDimensions::new(width, height))?;

        let roster: Vec<HeroState> = data
            .heroes
            .into_iter()
            .map(|hero| {
                HeroState::new(
                    HeroId(hero.id),
                    hero.name,
                    TeamId(hero.team),
                    Position::new(hero.row, hero.col),
                )
                .with_health(hero.health)
                .with_dead(hero.dead)
            })
            .collect();

        let mut owners: HashMap<HeroId, MineOwner> = HashMap::with_capacity(roster.len());
        for hero in &roster {
            if owners.insert(hero.id, MineOwner::of(hero)).is_some() {
                anyhow::bail!("hero {} is listed twice", hero.id);
            }
            if !hero.dead {
                board.place_hero(hero.clone())?;
            }
        }

        for well in &data.health_wells {
            board.place_health_well(well.position())?;
        }
        for rock in &data.impassable {
            board.place_impassable(rock.position())?;
        }
        for mine in &data.mines {
            let owner = match mine.owner {
                None => None,
                Some(id) => Some(*owners.get(&HeroId(id)).ok_or_else(|| {
                    anyhow::anyhow!(
                        "mine at ({}, {}) is owned by unknown hero {}",
                        mine.row,
                        mine.col,
                        id
                    )
                })?),
            };
            board.place_mine(Position::new(mine.row, mine.col), owner)?;
        }
        for bones in &data.bones {
            board.place_bones(bones.position())?;
        }

        Ok(Scenario {
            turn: data.turn,
            board,
            roster,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{BoardError, TileKind};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SKIRMISH: &str = r#"(
        turn: 3,
        dimensions: (5, 4),
        heroes: [
            (id: 0, name: "ada", team: 0, row: 1, col: 1, health: 90),
            (id: 1, name: "bo", team: 1, row: 2, col: 3),
            (id: 2, name: "cy", team: 1, row: 0, col: 0, health: 0, dead: true),
        ],
        mines: [
            (row: 3, col: 4, owner: Some(2)),
            (row: 3, col: 0),
        ],
        health_wells: [(row: 0, col: 4)],
        bones: [(row: 1, col: 2)],
        impassable: [(row: 2, col: 2)],
    )"#;

    #[test]
    fn builds_board_and_roster() {
        let scenario = ScenarioLoader::parse(SKIRMISH).unwrap();
        let board = &scenario.board;

        assert_eq!(scenario.turn, 3);
        assert_eq!(board.dimensions(), BoardDimensions::new(5, 4));
        assert_eq!(scenario.roster.len(), 3);
        assert_eq!(board.heroes().count(), 2);
        assert_eq!(board.hero(HeroId(1)).unwrap().health, HeroState::MAX_HEALTH);
        assert!(board.tile(Position::new(0, 4)).is_health_well());
        assert!(board.tile(Position::new(1, 2)).has_bones());
        assert_eq!(board.tile(Position::new(2, 2)).kind, TileKind::Impassable);
        assert_eq!(board.tile(Position::new(3, 0)).mine_owner(), Some(None));
    }

    #[test]
    fn dead_heroes_still_own_mines() {
        let scenario = ScenarioLoader::parse(SKIRMISH).unwrap();

        assert!(scenario.hero(HeroId(2)).unwrap().dead);
        assert!(scenario.board.hero(HeroId(2)).is_none());
        let tile = scenario.board.tile(Position::new(3, 4));
        let owner = tile.mine_owner().flatten().unwrap();
        assert_eq!(owner.id, HeroId(2));
        assert_eq!(owner.team, TeamId(1));
        assert!(owner.dead);
    }

    #[test]
    fn unknown_mine_owner_is_rejected() {
        let err = ScenarioLoader::parse(
            "(dimensions: (3, 3), heroes: [], mines: [(row: 0, col: 0, owner: Some(9))])",
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown hero 9"));
    }

    #[test]
    fn overlapping_placements_are_board_errors() {
        let err = ScenarioLoader::parse(
            r#"(
                dimensions: (3, 3),
                heroes: [(id: 0, name: "a", team: 0, row: 1, col: 1)],
                health_wells: [(row: 1, col: 1)],
            )"#,
        )
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<BoardError>(),
            Some(&BoardError::Occupied(Position::new(1, 1)))
        );
    }

    #[test]
    fn duplicate_hero_ids_are_rejected() {
        let err = ScenarioLoader::parse(
            r#"(
                dimensions: (3, 3),
                heroes: [
                    (id: 0, name: "a", team: 0, row: 0, col: 0),
                    (id: 0, name: "b", team: 1, row: 2, col: 2),
                ],
            )"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn loads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SKIRMISH.as_bytes()).unwrap();

        let scenario = ScenarioLoader::load(file.path()).unwrap();
        assert_eq!(scenario.roster[0].name, "ada");
    }

    #[test]
    fn malformed_files_name_the_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"(dimensions: oops)").unwrap();

        let err = ScenarioLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
