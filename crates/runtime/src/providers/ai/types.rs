//! Core types for the intent-precedence AI.

use arena_core::Direction;

/// A named goal a hero can pursue this turn.
///
/// Each intent carries a fixed [`rank`](Intent::rank); lower ranks take
/// precedence. Adjacency intents outrank long-range goals, which outrank the
/// fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    /// Adjacent enemy low enough to kill now.
    FinishEnemy,
    /// Adjacent enemy worth fighting because running to a well is hopeless.
    ConfrontEnemy,
    /// Adjacent teammate who needs healing.
    HelpFriend,
    /// Own health is low; head for the nearest well.
    GetHealthy,
    /// Adjacent well and a reason to drink from it.
    TakeBreak,
    /// Adjacent mine that can be captured.
    TakeMine,
    /// Adjacent bones to loot.
    TakeGrave,
    /// Board-wide search: nearest enemy weaker than us.
    SeekWeakerEnemy,
    /// Board-wide search: nearest capturable mine.
    SeekDiamondMine,
    /// Fallback: regroup with the nearest teammate.
    SeekTeamMember,
    /// Fallback: walk toward any enemy.
    SeekEnemy,
}

impl Intent {
    /// Returns every intent from highest to lowest precedence.
    pub const fn all() -> [Intent; 11] {
        [
            Intent::FinishEnemy,
            Intent::ConfrontEnemy,
            Intent::HelpFriend,
            Intent::GetHealthy,
            Intent::TakeBreak,
            Intent::TakeMine,
            Intent::TakeGrave,
            Intent::SeekWeakerEnemy,
            Intent::SeekDiamondMine,
            Intent::SeekTeamMember,
            Intent::SeekEnemy,
        ]
    }

    /// Precedence rank; lower wins.
    pub const fn rank(self) -> u8 {
        match self {
            Intent::FinishEnemy => 1,
            Intent::ConfrontEnemy => 2,
            Intent::HelpFriend => 3,
            Intent::GetHealthy | Intent::TakeBreak => 4,
            Intent::TakeMine => 5,
            Intent::TakeGrave => 6,
            Intent::SeekWeakerEnemy | Intent::SeekDiamondMine => 7,
            Intent::SeekTeamMember | Intent::SeekEnemy => 8,
        }
    }

    /// True for intents produced by inspecting the four adjacent tiles
    /// (plus the health check that runs alongside them).
    pub const fn is_local(self) -> bool {
        self.rank() <= 6
    }
}

/// A proposed move awaiting resolution.
///
/// `direction` is `None` when the source search found nothing; the resolver
/// ignores such candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub intent: Intent,
    pub direction: Option<Direction>,
}

impl Candidate {
    pub const fn new(intent: Intent, direction: Option<Direction>) -> Self {
        Self { intent, direction }
    }

    pub const fn toward(intent: Intent, direction: Direction) -> Self {
        Self::new(intent, Some(direction))
    }
}

/// The accepted move: an intent together with the step that serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub intent: Intent,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_declaration_order() {
        let ranks: Vec<u8> = Intent::all().iter().map(|intent| intent.rank()).collect();
        assert!(ranks.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn long_range_and_fallback_rank_below_every_local_intent() {
        let worst_local = Intent::all()
            .into_iter()
            .filter(|intent| intent.is_local())
            .map(Intent::rank)
            .max()
            .unwrap();
        assert!(Intent::SeekWeakerEnemy.rank() > worst_local);
        assert!(Intent::SeekDiamondMine.rank() > worst_local);
        assert!(Intent::SeekTeamMember.rank() > Intent::SeekDiamondMine.rank());
        assert!(Intent::SeekEnemy.rank() > Intent::SeekWeakerEnemy.rank());
    }

    #[test]
    fn healing_intents_share_a_rank() {
        assert_eq!(Intent::GetHealthy.rank(), Intent::TakeBreak.rank());
    }

    #[test]
    fn display_is_snake_case() {
        assert_eq!(Intent::SeekWeakerEnemy.to_string(), "seek_weaker_enemy");
    }
}
