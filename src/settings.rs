use crate::material::DEFAULT_KING_POINTS;

/// Policy knobs of a [`Game`](crate::Game).
///
/// # Examples
///
/// ```
/// use checkers::Settings;
///
/// let settings = Settings::default()
///     .with_king_points(2)
///     .with_quiet_turn_limit(Some(40));
/// assert_eq!(settings.king_points, 2);
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Settings {
    /// Points each surviving king is worth when a round is scored.
    pub king_points: u32,
    /// End the round in a tie after this many consecutive turns without a
    /// capture or promotion. `None` disables the rule, so that a tie can
    /// only be declared explicitly.
    pub quiet_turn_limit: Option<u32>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            king_points: DEFAULT_KING_POINTS,
            quiet_turn_limit: None,
        }
    }
}

impl Settings {
    #[must_use]
    pub const fn with_king_points(mut self, king_points: u32) -> Settings {
        self.king_points = king_points;
        self
    }

    #[must_use]
    pub const fn with_quiet_turn_limit(mut self, limit: Option<u32>) -> Settings {
        self.quiet_turn_limit = limit;
        self
    }
}
