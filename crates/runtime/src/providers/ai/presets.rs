//! Ready-to-use hero strategies.
//!
//! [`Strategy::HelpfulOpportunist`] runs the full layered engine. The rest are
//! single-minded archetypes built from the same search wrappers: each one
//! either heads for a well when hurt or chases one kind of target.
//!
//! # Organization
//!
//! - **Fighters**: `aggressor`, `unwise_assassin`, `careful_assassin`
//! - **Miners**: `health_nut`, `safe_diamond_miner`, `selfish_diamond_miner`
//! - **Support**: `priest`, `coward`
//! - **Testing**: `northerner`, `blind_man`
//!
//! # Usage
//!
//! ```rust,ignore
//! let strategy: Strategy = "careful_assassin".parse()?;
//! let direction = strategy.decide(&state, &env, &HeroAiConfig::default());
//! ```

use arena_core::{ArenaEnv, Direction, GameState, HeroAiConfig, PathInfo, PcgRng, compute_seed};

use super::engine;

/// A named decision function. Every variant is pure in `(state, env)`.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Strategy {
    /// The layered intent engine.
    #[default]
    HelpfulOpportunist,
    /// Health ≤ 30 drinks, otherwise attacks the nearest enemy.
    Aggressor,
    /// Health ≤ 75 drinks, otherwise mines.
    HealthNut,
    /// Health < 60 drinks, otherwise stays with the team.
    Priest,
    /// Health < 30 drinks, otherwise attacks the nearest enemy.
    UnwiseAssassin,
    /// Health < 50 drinks, otherwise hunts only weaker enemies.
    CarefulAssassin,
    /// Drinks early, tops up at an adjacent well, otherwise takes enemy mines.
    SafeDiamondMiner,
    /// Like [`Strategy::SafeDiamondMiner`] but also takes teammates' mines.
    SelfishDiamondMiner,
    /// Lives at the well.
    Coward,
    /// Always North.
    Northerner,
    /// A direction drawn from the turn and hero id.
    BlindMan,
}

impl Strategy {
    /// Decides a direction for `state.active_hero`; `None` means stay.
    ///
    /// `config` only affects [`Strategy::HelpfulOpportunist`]; the archetypes
    /// carry their own fixed thresholds.
    pub fn decide(
        self,
        state: &GameState,
        env: &ArenaEnv<'_>,
        config: &HeroAiConfig,
    ) -> Option<Direction> {
        let me = &state.active_hero;
        let health = me.health;
        let to = |path: Option<PathInfo>| path.map(|path| path.direction);

        let direction = match self {
            Strategy::HelpfulOpportunist => {
                engine::decide(state, env, config).map(|decision| decision.direction)
            }
            Strategy::Aggressor if health <= 30 => to(env.nearest_health_well(me)),
            Strategy::Aggressor => to(env.nearest_enemy(me)),
            Strategy::HealthNut if health <= 75 => to(env.nearest_health_well(me)),
            Strategy::HealthNut => to(env.nearest_non_team_diamond_mine(me)),
            Strategy::Priest if health < 60 => to(env.nearest_health_well(me)),
            Strategy::Priest => to(env.nearest_team_member(me)),
            Strategy::UnwiseAssassin if health < 30 => to(env.nearest_health_well(me)),
            Strategy::UnwiseAssassin => to(env.nearest_enemy(me)),
            Strategy::CarefulAssassin if health < 50 => to(env.nearest_health_well(me)),
            Strategy::CarefulAssassin => to(env.nearest_weaker_enemy(me)),
            Strategy::SafeDiamondMiner => miner(env, state, |env, state| {
                env.nearest_non_team_diamond_mine(&state.active_hero)
            }),
            Strategy::SelfishDiamondMiner => miner(env, state, |env, state| {
                env.nearest_unowned_diamond_mine(&state.active_hero)
            }),
            Strategy::Coward => to(env.nearest_health_well(me)),
            Strategy::Northerner => Some(Direction::North),
            Strategy::BlindMan => {
                let seed = compute_seed(state.turn, me.id.0, 0);
                PcgRng.choose(seed, &Direction::ALL)
            }
        };

        tracing::debug!(hero = %me.id, strategy = %self, ?direction, "strategy decided");
        direction
    }
}

/// Shared shape of the two miners: drink below 40, top up when a well is
/// right next to us, otherwise walk to whatever `nearest_mine` finds.
fn miner(
    env: &ArenaEnv<'_>,
    state: &GameState,
    nearest_mine: impl Fn(&ArenaEnv<'_>, &GameState) -> Option<PathInfo>,
) -> Option<Direction> {
    let me = &state.active_hero;
    let well = env.nearest_health_well(me);

    if me.health < 40 {
        return well.map(|path| path.direction);
    }
    if let Some(well) = well.filter(|well| me.health < 100 && well.distance == 1) {
        return Some(well.direction);
    }
    nearest_mine(env, state).map(|path| path.direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{Board, BreadthFirstPathfinder, HeroId, HeroState, MineOwner, Position, TeamId};
    use strum::IntoEnumIterator;

    const ME: HeroId = HeroId(1);

    fn hero(id: u32, team: u32, row: i32, col: i32) -> HeroState {
        HeroState::new(HeroId(id), format!("h{id}"), TeamId(team), Position::new(row, col))
    }

    /// 7x7 board: me in the middle, a well to the North, an enemy to the
    /// South, a teammate to the West and an unowned mine to the East, each
    /// two steps away.
    fn crossroads(health: u32) -> Board {
        let mut board = Board::square(7).unwrap();
        board.place_hero(hero(1, 0, 3, 3).with_health(health)).unwrap();
        board.place_health_well(Position::new(1, 3)).unwrap();
        board.place_hero(hero(2, 1, 5, 3).with_health(50)).unwrap();
        board.place_hero(hero(3, 0, 3, 1)).unwrap();
        board.place_mine(Position::new(3, 5), None).unwrap();
        board
    }

    fn decide(strategy: Strategy, board: &Board, turn: u32) -> Option<Direction> {
        let state = GameState::for_hero(board.clone(), ME, turn).unwrap();
        let env = ArenaEnv::new(board, &BreadthFirstPathfinder);
        strategy.decide(&state, &env, &HeroAiConfig::default())
    }

    #[test]
    fn names_round_trip_in_snake_case() {
        assert_eq!("careful_assassin".parse::<Strategy>().unwrap(), Strategy::CarefulAssassin);
        assert_eq!("Blind_Man".parse::<Strategy>().unwrap(), Strategy::BlindMan);
        assert_eq!(Strategy::SafeDiamondMiner.to_string(), "safe_diamond_miner");
        assert!("balanced".parse::<Strategy>().is_err());
        assert_eq!(Strategy::default(), Strategy::HelpfulOpportunist);
    }

    #[test]
    fn fighters_switch_to_the_well_at_their_threshold() {
        let healthy = crossroads(90);
        let hurt = crossroads(25);

        for strategy in [Strategy::Aggressor, Strategy::UnwiseAssassin] {
            assert_eq!(decide(strategy, &healthy, 0), Some(Direction::South));
            assert_eq!(decide(strategy, &hurt, 0), Some(Direction::North));
        }
        assert_eq!(decide(Strategy::Aggressor, &crossroads(30), 0), Some(Direction::North));
        assert_eq!(decide(Strategy::UnwiseAssassin, &crossroads(30), 0), Some(Direction::South));
    }

    #[test]
    fn careful_assassin_only_hunts_weaker_enemies() {
        assert_eq!(decide(Strategy::CarefulAssassin, &crossroads(90), 0), Some(Direction::South));
        assert_eq!(decide(Strategy::CarefulAssassin, &crossroads(60), 0), Some(Direction::South));
        assert_eq!(decide(Strategy::CarefulAssassin, &crossroads(49), 0), Some(Direction::North));

        let mut board = Board::square(7).unwrap();
        board.place_hero(hero(1, 0, 3, 3).with_health(55)).unwrap();
        board.place_hero(hero(2, 1, 5, 3).with_health(80)).unwrap();
        assert_eq!(decide(Strategy::CarefulAssassin, &board, 0), None);
    }

    #[test]
    fn support_strategies() {
        assert_eq!(decide(Strategy::Priest, &crossroads(90), 0), Some(Direction::West));
        assert_eq!(decide(Strategy::Priest, &crossroads(59), 0), Some(Direction::North));
        assert_eq!(decide(Strategy::Coward, &crossroads(100), 0), Some(Direction::North));
        assert_eq!(decide(Strategy::HealthNut, &crossroads(80), 0), Some(Direction::East));
        assert_eq!(decide(Strategy::HealthNut, &crossroads(75), 0), Some(Direction::North));
    }

    #[test]
    fn miners_top_up_only_at_an_adjacent_well() {
        assert_eq!(decide(Strategy::SafeDiamondMiner, &crossroads(90), 0), Some(Direction::East));
        assert_eq!(decide(Strategy::SafeDiamondMiner, &crossroads(39), 0), Some(Direction::North));

        let mut board = Board::square(5).unwrap();
        board.place_hero(hero(1, 0, 2, 2).with_health(90)).unwrap();
        board.place_health_well(Position::new(2, 1)).unwrap();
        board.place_mine(Position::new(2, 4), None).unwrap();
        assert_eq!(decide(Strategy::SafeDiamondMiner, &board, 0), Some(Direction::West));

        let mut full = Board::square(5).unwrap();
        full.place_hero(hero(1, 0, 2, 2)).unwrap();
        full.place_health_well(Position::new(2, 1)).unwrap();
        full.place_mine(Position::new(2, 4), None).unwrap();
        assert_eq!(decide(Strategy::SafeDiamondMiner, &full, 0), Some(Direction::East));
    }

    #[test]
    fn selfish_miner_takes_team_mines_too() {
        let me = hero(1, 0, 0, 0);
        let mate = hero(2, 0, 4, 4);
        let mut board = Board::square(5).unwrap();
        board.place_hero(me.clone()).unwrap();
        board.place_hero(mate.clone()).unwrap();
        board
            .place_mine(Position::new(0, 2), Some(MineOwner::of(&mate)))
            .unwrap();

        assert_eq!(decide(Strategy::SafeDiamondMiner, &board, 0), None);
        assert_eq!(decide(Strategy::SelfishDiamondMiner, &board, 0), Some(Direction::East));

        board
            .place_mine(Position::new(2, 0), Some(MineOwner::of(&me)))
            .unwrap();
        assert_eq!(decide(Strategy::SelfishDiamondMiner, &board, 0), Some(Direction::East));
    }

    #[test]
    fn blind_man_is_stable_per_turn() {
        let board = crossroads(90);
        for turn in 0..20 {
            let first = decide(Strategy::BlindMan, &board, turn);
            assert!(first.is_some());
            assert_eq!(decide(Strategy::BlindMan, &board, turn), first);
        }
    }

    #[test]
    fn every_strategy_is_deterministic() {
        let board = crossroads(45);
        for strategy in Strategy::iter() {
            assert_eq!(decide(strategy, &board, 7), decide(strategy, &board, 7), "{strategy}");
        }
        assert_eq!(decide(Strategy::Northerner, &board, 0), Some(Direction::North));
    }
}
