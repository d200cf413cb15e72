use super::{HeroId, Position, TeamId};

/// Snapshot of a single hero as seen on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroState {
    pub id: HeroId,
    pub name: String,
    pub position: Position,
    /// Current health, 0-100.
    pub health: u32,
    pub team: TeamId,
    pub dead: bool,
}

impl HeroState {
    pub const MAX_HEALTH: u32 = 100;

    pub fn new(id: HeroId, name: impl Into<String>, team: TeamId, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            health: Self::MAX_HEALTH,
            team,
            dead: false,
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.min(Self::MAX_HEALTH);
        self
    }

    #[must_use]
    pub fn with_dead(mut self, dead: bool) -> Self {
        self.dead = dead;
        self
    }

    pub fn is_teammate_of(&self, other: &HeroState) -> bool {
        self.team == other.team
    }

    pub fn is_enemy_of(&self, other: &HeroState) -> bool {
        self.team != other.team
    }
}
