//! Candidate generation from the hero's own health and its four neighbors.

use arena_core::{Direction, HeroState, MineOwner, Tile};
use arrayvec::ArrayVec;

use super::AiContext;
use super::neighborhood::{Neighborhood, TileClass, classify};
use super::types::{Candidate, Intent};

/// Upper bound on local candidates: one health check plus at most two
/// intents (finish and confront) per adjacent tile.
pub const MAX_LOCAL_CANDIDATES: usize = 1 + 2 * Neighborhood::LEN;

pub type LocalCandidates = ArrayVec<Candidate, MAX_LOCAL_CANDIDATES>;

/// Produces local candidates in the order the resolver must see them.
///
/// # Rules
///
/// Before the scan, a hero at or below `get_healthy_health` proposes
/// `GetHealthy` toward the nearest well. Then, for each direction in
/// North, East, South, West order, every matching rule emits:
///
/// | Neighbor | Condition | Intent |
/// |---|---|---|
/// | teammate | health ≤ `help_friend_health` | `HelpFriend` |
/// | enemy | health ≤ `finish_enemy_health` | `FinishEnemy` |
/// | enemy | not next to a well, and the nearest well is too far to reach | `ConfrontEnemy` |
/// | mine | unowned, owner dead, or owner on another team | `TakeMine` |
/// | well | room to heal and no enemy camping a well next to us | `TakeBreak` |
/// | bones | always | `TakeGrave` |
pub struct LocalIntentGenerator;

impl LocalIntentGenerator {
    pub fn generate(ctx: &AiContext) -> LocalCandidates {
        let mut candidates = LocalCandidates::new();

        if ctx.health() <= ctx.config.get_healthy_health {
            let direction = ctx.nearest_health_well().map(|well| well.direction);
            candidates.push(Candidate::new(Intent::GetHealthy, direction));
        }

        let neighborhood = ctx.neighborhood();
        for (direction, tile) in neighborhood.iter() {
            Self::evaluate_tile(ctx, direction, tile, &mut candidates);
        }

        tracing::debug!(
            hero = %ctx.hero.id,
            count = candidates.len(),
            "LocalIntentGenerator: candidates generated"
        );
        candidates
    }

    fn evaluate_tile(
        ctx: &AiContext,
        direction: Direction,
        tile: &Tile,
        out: &mut LocalCandidates,
    ) {
        let mut emit = |intent: Intent| {
            tracing::trace!(?intent, ?direction, "  local candidate");
            out.push(Candidate::toward(intent, direction));
        };

        match classify(tile, ctx.hero) {
            TileClass::Friend(friend) => {
                if friend.health <= ctx.config.help_friend_health {
                    emit(Intent::HelpFriend);
                }
            }
            TileClass::Enemy(enemy) => {
                if enemy.health <= ctx.config.finish_enemy_health {
                    emit(Intent::FinishEnemy);
                }
                if should_confront(ctx, tile) {
                    emit(Intent::ConfrontEnemy);
                }
            }
            TileClass::DiamondMine { owner } => {
                if is_capturable(owner, ctx.hero) {
                    emit(Intent::TakeMine);
                }
            }
            TileClass::HealthWell => {
                if should_take_break(ctx) {
                    emit(Intent::TakeBreak);
                }
            }
            TileClass::Grave => emit(Intent::TakeGrave),
            TileClass::Empty | TileClass::OutOfBounds => {}
        }
    }
}

/// Fight when the enemy cannot heal mid-fight and the nearest well is more
/// than one step away and further than our health would carry us.
fn should_confront(ctx: &AiContext, enemy_tile: &Tile) -> bool {
    let Some(well) = ctx.nearest_health_well() else {
        return false;
    };
    !ctx.is_adjacent_to_health_well(enemy_tile)
        && well.distance > 1
        && well.distance.saturating_mul(ctx.config.confront_distance_factor) > ctx.health()
}

fn is_capturable(owner: Option<&MineOwner>, me: &HeroState) -> bool {
    match owner {
        None => true,
        Some(owner) => owner.dead || owner.team != me.team,
    }
}

/// Top up when not full and no enemy is standing next to a well right beside
/// us; below `rest_health` always drink.
fn should_take_break(ctx: &AiContext) -> bool {
    let enemy_allows_rest = match ctx.nearest_enemy() {
        None => true,
        Some(enemy) => {
            enemy.distance > 1 || !ctx.is_adjacent_to_health_well(&ctx.env.tile(enemy.target))
        }
    };

    (ctx.health() < ctx.config.full_health && enemy_allows_rest)
        || ctx.health() < ctx.config.rest_health
}
