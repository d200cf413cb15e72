//! Last-resort goals tried in a fixed order once everything else came up empty.

use arena_core::PathInfo;

use super::AiContext;
use super::types::Intent;

/// A board-wide search run against the deciding hero.
pub type FallbackQuery = for<'a> fn(&AiContext<'a>) -> Option<PathInfo>;

/// Tried top to bottom; the first query that finds something decides the move.
pub const FALLBACK_CHAIN: [(Intent, FallbackQuery); 2] = [
    (Intent::SeekTeamMember, nearest_team_member),
    (Intent::SeekEnemy, nearest_enemy),
];

fn nearest_team_member(ctx: &AiContext<'_>) -> Option<PathInfo> {
    ctx.env.nearest_team_member(ctx.hero)
}

// Reuses the search the context already ran.
fn nearest_enemy(ctx: &AiContext<'_>) -> Option<PathInfo> {
    ctx.nearest_enemy()
}
