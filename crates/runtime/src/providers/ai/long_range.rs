//! Board-wide goals consulted only when nothing adjacent is worth doing.

use arena_core::{ArenaEnv, HeroAiConfig, HeroState, PathInfo, Tile};

use super::AiContext;
use super::neighborhood::{Neighborhood, is_adjacent_to_health_well};
use super::types::{Candidate, Intent};

/// Picks between the nearest weaker enemy and the nearest capturable mine.
///
/// Exactly one candidate comes out when either search succeeds:
/// a lone result is used directly, and when both exist the strictly closer
/// one wins with ties going to the mine.
pub struct LongRangeGoalFinder;

impl LongRangeGoalFinder {
    pub fn find(ctx: &AiContext) -> Option<Candidate> {
        let enemy = Self::nearest_weaker_enemy(ctx);
        let mine = Self::nearest_capturable_mine(ctx);

        tracing::debug!(
            hero = %ctx.hero.id,
            weaker_enemy = ?enemy.map(|p| p.distance),
            diamond_mine = ?mine.map(|p| p.distance),
            "LongRangeGoalFinder: searches done"
        );

        let (intent, path) = match (enemy, mine) {
            (None, None) => return None,
            (Some(enemy), None) => (Intent::SeekWeakerEnemy, enemy),
            (None, Some(mine)) => (Intent::SeekDiamondMine, mine),
            (Some(enemy), Some(mine)) if enemy.distance < mine.distance => {
                (Intent::SeekWeakerEnemy, enemy)
            }
            (Some(_), Some(mine)) => (Intent::SeekDiamondMine, mine),
        };
        Some(Candidate::toward(intent, path.direction))
    }

    pub fn nearest_weaker_enemy(ctx: &AiContext) -> Option<PathInfo> {
        let env = ctx.env;
        let (me, config) = (ctx.hero, ctx.config);
        env.find_nearest(me.position, &|tile| is_weaker_enemy(&env, config, me, tile))
    }

    pub fn nearest_capturable_mine(ctx: &AiContext) -> Option<PathInfo> {
        let env = ctx.env;
        let me = ctx.hero;
        env.find_nearest(me.position, &|tile| is_capturable_mine(&env, me, tile))
    }
}

/// A desperate enemy is always fair game. Otherwise the enemy must be weaker
/// than us and away from any well it could heal at.
fn is_weaker_enemy(
    env: &ArenaEnv<'_>,
    config: &HeroAiConfig,
    me: &HeroState,
    tile: &Tile,
) -> bool {
    let Some(enemy) = tile.hero().filter(|hero| hero.is_enemy_of(me)) else {
        return false;
    };
    if enemy.health <= config.desperate_enemy_health {
        return true;
    }
    if is_adjacent_to_health_well(env, tile) {
        return false;
    }
    enemy.health < me.health
}

fn is_capturable_mine(env: &ArenaEnv<'_>, me: &HeroState, tile: &Tile) -> bool {
    let Some(owner) = tile.mine_owner() else {
        return false;
    };
    if owner.is_some_and(|owner| owner.dead) {
        return true;
    }
    if is_guarded_by_team(env, me, tile) {
        return false;
    }
    match owner {
        Some(owner) => owner.team != me.team,
        None => true,
    }
}

/// A teammate already standing next to the mine will take it.
fn is_guarded_by_team(env: &ArenaEnv<'_>, me: &HeroState, tile: &Tile) -> bool {
    Neighborhood::scan(env, tile.position)
        .iter()
        .filter_map(|(_, neighbor)| neighbor.hero())
        .any(|hero| hero.team == me.team)
}
