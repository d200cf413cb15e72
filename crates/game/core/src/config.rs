use std::env;

/// Tunable thresholds used by the move-decision engine.
///
/// Defaults reproduce the stock opportunist behaviour. All health values are
/// on the arena's 0-100 scale.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeroAiConfig {
    /// Adjacent friends at or below this health are helped.
    pub help_friend_health: u32,
    /// Adjacent enemies at or below this health are finished off.
    pub finish_enemy_health: u32,
    /// At or below this health the hero heads for the nearest well.
    pub get_healthy_health: u32,
    /// Health of a fully healed hero.
    pub full_health: u32,
    /// Below this health an adjacent well is always used.
    pub rest_health: u32,
    /// Damage-per-step estimate used when deciding to stand and fight.
    pub confront_distance_factor: u32,
    /// Enemies at or below this health are chased even next to a well.
    pub desperate_enemy_health: u32,
}

impl HeroAiConfig {
    pub const DEFAULT_HELP_FRIEND_HEALTH: u32 = 60;
    pub const DEFAULT_FINISH_ENEMY_HEALTH: u32 = 30;
    pub const DEFAULT_GET_HEALTHY_HEALTH: u32 = 60;
    pub const DEFAULT_FULL_HEALTH: u32 = 100;
    pub const DEFAULT_REST_HEALTH: u32 = 80;
    pub const DEFAULT_CONFRONT_DISTANCE_FACTOR: u32 = 20;
    pub const DEFAULT_DESPERATE_ENEMY_HEALTH: u32 = 20;

    /// Largest accepted confront factor. A two-step run to a well already
    /// costs more than full health at this value.
    pub const MAX_CONFRONT_DISTANCE_FACTOR: u32 = 100;

    pub const fn new() -> Self {
        Self {
            help_friend_health: Self::DEFAULT_HELP_FRIEND_HEALTH,
            finish_enemy_health: Self::DEFAULT_FINISH_ENEMY_HEALTH,
            get_healthy_health: Self::DEFAULT_GET_HEALTHY_HEALTH,
            full_health: Self::DEFAULT_FULL_HEALTH,
            rest_health: Self::DEFAULT_REST_HEALTH,
            confront_distance_factor: Self::DEFAULT_CONFRONT_DISTANCE_FACTOR,
            desperate_enemy_health: Self::DEFAULT_DESPERATE_ENEMY_HEALTH,
        }
    }

    /// Applies overrides from process environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_HELP_FRIEND_HEALTH` (default: 60)
    /// - `ARENA_FINISH_ENEMY_HEALTH` (default: 30)
    /// - `ARENA_GET_HEALTHY_HEALTH` (default: 60)
    /// - `ARENA_REST_HEALTH` (default: 80)
    /// - `ARENA_CONFRONT_FACTOR` (default: 20)
    /// - `ARENA_DESPERATE_ENEMY_HEALTH` (default: 20)
    ///
    /// Unparseable values are ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides looked up by variable name through `lookup`.
    ///
    /// `rest_health` is clamped to `full_health` and the confront factor to
    /// [`Self::MAX_CONFRONT_DISTANCE_FACTOR`].
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| parse_var::<u32>(lookup(key));

        if let Some(value) = read("ARENA_HELP_FRIEND_HEALTH") {
            self.help_friend_health = value;
        }
        if let Some(value) = read("ARENA_FINISH_ENEMY_HEALTH") {
            self.finish_enemy_health = value;
        }
        if let Some(value) = read("ARENA_GET_HEALTHY_HEALTH") {
            self.get_healthy_health = value;
        }
        if let Some(value) = read("ARENA_REST_HEALTH") {
            self.rest_health = value.min(self.full_health);
        }
        if let Some(value) = read("ARENA_CONFRONT_FACTOR") {
            self.confront_distance_factor = value.min(Self::MAX_CONFRONT_DISTANCE_FACTOR);
        }
        if let Some(value) = read("ARENA_DESPERATE_ENEMY_HEALTH") {
            self.desperate_enemy_health = value;
        }
        self
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::new().with_env_overrides()
    }
}

impl Default for HeroAiConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
