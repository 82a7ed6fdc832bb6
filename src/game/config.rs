use crate::FEATURE_SIZE;
use crate::FEATURES;
use crate::MAX_FEATURES;
use crate::MAX_POLL;
use crate::TABLE_SIZE;
use crate::TOKENS;
use crate::dealer::TimerPolicy;
use std::time::Duration;

/// Everything tunable about a game.
#[derive(Debug, Clone)]
pub struct Config {
    /// Players fed by the keyboard; they take the lowest seats.
    pub humans: usize,
    /// Players fed by a [`Robot`](crate::players::Robot).
    pub robots: usize,
    pub table_size: usize,
    /// Features per card; the deck holds `3^features` cards.
    pub features: usize,
    /// Length of a round before the table is reshuffled.
    pub turn_timeout: Duration,
    /// Countdown at or below this is shown as a warning.
    pub warning: Duration,
    pub point_freeze: Duration,
    pub penalty_freeze: Duration,
    /// Dealer polling interval while a round runs.
    pub poll: Duration,
    /// Pause after each card placed, for display.
    pub deal_delay: Duration,
    /// Pause after the winners are announced.
    pub end_pause: Duration,
    /// Interval between robot presses.
    pub robot_pace: Duration,
    /// Log the sets on the table after every deal.
    pub hints: bool,
    pub timer: TimerPolicy,
    /// Seed for the dealer's shuffles and the robots; entropy if absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            humans: 0,
            robots: 2,
            table_size: TABLE_SIZE,
            features: FEATURES,
            turn_timeout: Duration::from_secs(60),
            warning: Duration::from_secs(5),
            point_freeze: Duration::from_secs(1),
            penalty_freeze: Duration::from_secs(5),
            poll: MAX_POLL,
            deal_delay: Duration::ZERO,
            end_pause: Duration::ZERO,
            robot_pace: Duration::from_millis(100),
            hints: false,
            timer: TimerPolicy::default(),
            seed: None,
        }
    }
}

impl Config {
    pub fn seats(&self) -> usize {
        self.humans + self.robots
    }
    pub fn deck_size(&self) -> usize {
        FEATURE_SIZE.pow(self.features as u32)
    }
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seats() == 0 {
            return Err(ConfigError::NoPlayers);
        }
        if self.humans > 2 {
            return Err(ConfigError::TooManyHumans(self.humans));
        }
        if self.table_size < TOKENS {
            return Err(ConfigError::TableTooSmall(self.table_size));
        }
        if self.features == 0 || self.features > MAX_FEATURES {
            return Err(ConfigError::Features(self.features));
        }
        if self.warning > self.turn_timeout {
            return Err(ConfigError::Warning {
                warning: self.warning,
                timeout: self.turn_timeout,
            });
        }
        if self.poll.is_zero() || self.poll > MAX_POLL {
            return Err(ConfigError::Poll(self.poll));
        }
        Ok(())
    }
}

/// Settings that cannot make a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoPlayers,
    TooManyHumans(usize),
    TableTooSmall(usize),
    Features(usize),
    Warning { warning: Duration, timeout: Duration },
    Poll(Duration),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPlayers => write!(f, "at least one player is required"),
            Self::TooManyHumans(n) => write!(f, "{} humans, but only two keyboard layouts", n),
            Self::TableTooSmall(n) => write!(f, "table of {} slots cannot hold a claim", n),
            Self::Features(n) => write!(f, "{} features, expected 1..={}", n, MAX_FEATURES),
            Self::Warning { warning, timeout } => write!(
                f,
                "warning {:?} is longer than the turn timeout {:?}",
                warning, timeout
            ),
            Self::Poll(poll) => write!(f, "poll interval {:?} outside (0, {:?}]", poll, MAX_POLL),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.deck_size(), 81);
        assert_eq!(config.seats(), 2);
    }

    #[test]
    fn rejects_impossible_settings() {
        let base = Config::default();
        let cases = [
            (Config { robots: 0, ..base.clone() }, ConfigError::NoPlayers),
            (Config { humans: 3, ..base.clone() }, ConfigError::TooManyHumans(3)),
            (Config { table_size: 2, ..base.clone() }, ConfigError::TableTooSmall(2)),
            (Config { features: 7, ..base.clone() }, ConfigError::Features(7)),
            (Config { poll: Duration::ZERO, ..base.clone() }, ConfigError::Poll(Duration::ZERO)),
        ];
        for (config, error) in cases {
            assert_eq!(config.validate(), Err(error));
        }
    }

    #[test]
    fn warning_must_fit_in_timeout() {
        let config = Config {
            turn_timeout: Duration::from_secs(3),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Warning { .. })));
    }
}
