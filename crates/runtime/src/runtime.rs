//! Per-hero dispatch.
//!
//! The host owns one board snapshot per turn. For each hero that should act,
//! the runtime builds that hero's [`GameState`], wires up an [`ArenaEnv`], and
//! asks a [`MoveProvider`] for the move. Calls for different heroes share
//! nothing mutable and may run in parallel.

use arena_core::{ArenaEnv, Board, BoardError, GameState, HeroId, HeroState, Move, Pathfinder};

use crate::api::{MoveProvider, Result, RuntimeError};

/// Decides the move of hero `id` on `board`.
///
/// # Errors
///
/// Returns [`RuntimeError::UnknownHero`] if no living hero with `id` stands on
/// the board.
pub fn decide_for(
    provider: &dyn MoveProvider,
    board: &Board,
    pathfinder: &dyn Pathfinder,
    id: HeroId,
    turn: u32,
) -> Result<Move> {
    let state = GameState::for_hero(board.clone(), id, turn).map_err(|err| match err {
        BoardError::UnknownHero(id) => RuntimeError::UnknownHero(id),
        other => RuntimeError::Board(other),
    })?;
    let env = ArenaEnv::new(board, pathfinder);

    let chosen = provider.provide_move(&state, &env);
    tracing::info!(
        hero = %id,
        name = %state.active_hero.name,
        turn,
        chosen = %chosen,
        "move decided"
    );
    Ok(chosen)
}

/// Resolves which heroes act this turn.
///
/// With `requested` set, that hero alone is returned after checking it exists
/// and is alive. Otherwise every living hero in `roster` is returned, in
/// roster order.
///
/// # Errors
///
/// [`RuntimeError::UnknownHero`] or [`RuntimeError::DeadHero`] for a bad
/// explicit request.
pub fn select_heroes(roster: &[HeroState], requested: Option<HeroId>) -> Result<Vec<HeroId>> {
    let Some(id) = requested else {
        return Ok(living_heroes(roster).map(|hero| hero.id).collect());
    };

    let hero = roster
        .iter()
        .find(|hero| hero.id == id)
        .ok_or(RuntimeError::UnknownHero(id))?;
    if hero.dead {
        return Err(RuntimeError::DeadHero(id));
    }
    Ok(vec![id])
}

pub fn living_heroes(roster: &[HeroState]) -> impl Iterator<Item = &HeroState> {
    roster.iter().filter(|hero| !hero.dead)
}
