//! Fixed-precedence folding of candidates into a single decision.

use arena_core::Direction;

use super::types::{Candidate, Decision, Intent};

/// Running best move for one decision.
///
/// # Semantics
///
/// - A candidate without a direction is ignored.
/// - The first candidate with a direction is accepted.
/// - A later candidate replaces the current best only if its rank is
///   strictly lower. Equal ranks never displace, so callers must feed
///   candidates in the engine's fixed order for ties to be deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrecedenceResolver {
    best: Option<Decision>,
}

impl PrecedenceResolver {
    pub const fn new() -> Self {
        Self { best: None }
    }

    /// Offers `(intent, direction)`; returns `true` if it became the best move.
    pub fn consider(&mut self, intent: Intent, direction: Option<Direction>) -> bool {
        let Some(direction) = direction else {
            return false;
        };

        let accept = match self.best {
            None => true,
            Some(current) => intent.rank() < current.intent.rank(),
        };

        if accept {
            tracing::trace!(?intent, ?direction, "PrecedenceResolver: accepted");
            self.best = Some(Decision { intent, direction });
        }
        accept
    }

    pub fn consider_candidate(&mut self, candidate: Candidate) -> bool {
        self.consider(candidate.intent, candidate.direction)
    }

    /// Folds candidates in iteration order.
    pub fn consider_all(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
        for candidate in candidates {
            self.consider_candidate(candidate);
        }
    }

    pub fn decision(&self) -> Option<Decision> {
        self.best
    }

    pub fn direction(&self) -> Option<Direction> {
        self.best.map(|decision| decision.direction)
    }

    pub fn is_resolved(&self) -> bool {
        self.best.is_some()
    }
}
