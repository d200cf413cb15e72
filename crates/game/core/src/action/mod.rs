//! Moves a hero can submit for a turn.
//!
//! The arena accepts exactly five literal answers per turn. [`Direction`]
//! covers the four steps, and [`Move`] adds the implicit `Stay` the host
//! substitutes whenever a strategy produces nothing.
mod movement;

pub use movement::{Direction, Move};
