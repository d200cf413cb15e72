use arena_core::{
    ArenaEnv, Board, BreadthFirstPathfinder, Direction, GameState, HeroAiConfig, HeroId,
    HeroState, MineOwner, Move, Position, TeamId,
};
use arena_runtime::{Intent, MoveProvider, Strategy, StrategyProvider, decide, decide_move};

const ME: HeroId = HeroId(0);

fn hero(id: u32, team: u32, row: i32, col: i32, health: u32) -> HeroState {
    HeroState::new(HeroId(id), format!("hero-{id}"), TeamId(team), Position::new(row, col))
        .with_health(health)
}

fn host_move(board: &Board) -> Move {
    let state = GameState::for_hero(board.clone(), ME, 12).unwrap();
    let env = ArenaEnv::new(board, &BreadthFirstPathfinder);
    Move::from(decide_move(&state, &env))
}

fn intent(board: &Board) -> Option<Intent> {
    let state = GameState::for_hero(board.clone(), ME, 12).unwrap();
    let env = ArenaEnv::new(board, &BreadthFirstPathfinder);
    decide(&state, &env, &HeroAiConfig::default()).map(|decision| decision.intent)
}

#[test]
fn low_health_walks_to_the_well() {
    let mut board = Board::square(9).unwrap();
    board.place_hero(hero(0, 0, 4, 4, 50)).unwrap();
    board.place_health_well(Position::new(4, 7)).unwrap();

    assert_eq!(host_move(&board), Move::East);
    assert_eq!(intent(&board), Some(Intent::GetHealthy));
}

#[test]
fn finishing_blow_beats_everything_nearby() {
    let mut board = Board::square(9).unwrap();
    board.place_hero(hero(0, 0, 4, 4, 90)).unwrap();
    board.place_hero(hero(1, 1, 3, 4, 25)).unwrap();
    board.place_hero(hero(2, 0, 4, 5, 10)).unwrap();
    board.place_mine(Position::new(5, 4), None).unwrap();

    assert_eq!(host_move(&board), Move::North);
    assert_eq!(intent(&board), Some(Intent::FinishEnemy));
}

#[test]
fn wounded_friend_beats_free_mine() {
    let mut board = Board::square(9).unwrap();
    board.place_hero(hero(0, 0, 4, 4, 90)).unwrap();
    board.place_hero(hero(2, 0, 4, 5, 40)).unwrap();
    board.place_mine(Position::new(5, 4), None).unwrap();

    assert_eq!(host_move(&board), Move::East);
}

#[test]
fn closer_weaker_enemy_beats_farther_mine() {
    let mut board = Board::square(12).unwrap();
    board.place_hero(hero(0, 0, 6, 6, 90)).unwrap();
    board.place_hero(hero(1, 1, 6, 2, 45)).unwrap();
    board.place_mine(Position::new(0, 6), None).unwrap();

    assert_eq!(host_move(&board), Move::West);
    assert_eq!(intent(&board), Some(Intent::SeekWeakerEnemy));
}

#[test]
fn closer_mine_beats_farther_weaker_enemy() {
    let mut board = Board::square(12).unwrap();
    board.place_hero(hero(0, 0, 6, 6, 90)).unwrap();
    board.place_hero(hero(1, 1, 0, 6, 45)).unwrap();
    board
        .place_mine(
            Position::new(6, 2),
            Some(MineOwner::of(&hero(3, 1, 0, 0, 100))),
        )
        .unwrap();

    assert_eq!(host_move(&board), Move::West);
    assert_eq!(intent(&board), Some(Intent::SeekDiamondMine));
}

#[test]
fn lonely_hero_regroups_with_the_team() {
    let mut board = Board::square(9).unwrap();
    board.place_hero(hero(0, 0, 4, 4, 90)).unwrap();
    board.place_hero(hero(2, 0, 8, 4, 100)).unwrap();
    board.place_hero(hero(1, 1, 0, 4, 100)).unwrap();

    assert_eq!(host_move(&board), Move::South);
    assert_eq!(intent(&board), Some(Intent::SeekTeamMember));
}

#[test]
fn nothing_left_to_do_stays_put() {
    let mut board = Board::square(4).unwrap();
    board.place_hero(hero(0, 0, 1, 1, 90)).unwrap();
    board.place_impassable(Position::new(0, 0)).unwrap();

    assert_eq!(host_move(&board), Move::Stay);
    assert_eq!(intent(&board), None);
}

#[test]
fn rocks_are_walked_around() {
    let mut board = Board::square(5).unwrap();
    board.place_hero(hero(0, 0, 2, 0, 90)).unwrap();
    board.place_impassable(Position::new(2, 1)).unwrap();
    board.place_impassable(Position::new(1, 1)).unwrap();
    board.place_mine(Position::new(2, 2), None).unwrap();

    assert_eq!(host_move(&board), Move::South);
}

#[test]
fn provider_wraps_the_default_strategy() {
    let mut board = Board::square(9).unwrap();
    board.place_hero(hero(0, 0, 4, 4, 50)).unwrap();
    board.place_health_well(Position::new(4, 7)).unwrap();

    let state = GameState::for_hero(board.clone(), ME, 0).unwrap();
    let env = ArenaEnv::new(&board, &BreadthFirstPathfinder);
    let provider = StrategyProvider::default();

    assert_eq!(provider.strategy(), Strategy::HelpfulOpportunist);
    assert_eq!(provider.provide_move(&state, &env), Move::East);
    assert_eq!(Move::from(Some(Direction::East)), Move::East);
}
