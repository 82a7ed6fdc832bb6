use std::time::Duration;
use tokio::time::Instant;

/// What a successful claim does to the round clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPolicy {
    /// Every point restarts the countdown.
    #[default]
    ResetOnPoint,
    /// The round ends on schedule regardless of points.
    Fixed,
}

/// Deadline tracking for the round countdown.
#[derive(Debug)]
pub struct Timer {
    timeout: Duration,
    warning: Duration,
    deadline: Option<Instant>,
}

impl Timer {
    pub fn new(timeout: Duration, warning: Duration) -> Self {
        Self {
            timeout,
            warning,
            deadline: None,
        }
    }
    pub fn start(&mut self) {
        self.deadline = Some(Instant::now() + self.timeout);
    }
    pub fn clear(&mut self) {
        self.deadline = None;
    }
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
    pub fn expired(&self) -> bool {
        self.deadline.map(|d| Instant::now() >= d).unwrap_or(false)
    }
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }
    /// Whether the countdown has entered the warning zone.
    pub fn warns(&self) -> bool {
        self.remaining().map(|r| r <= self.warning).unwrap_or(false)
    }
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_starts_cleared() {
        let timer = Timer::new(Duration::from_secs(60), Duration::from_secs(5));
        assert!(timer.deadline().is_none());
        assert!(timer.remaining().is_none());
        assert!(!timer.expired());
        assert!(!timer.warns());
    }

    #[tokio::test]
    async fn timer_sets_deadline() {
        let mut timer = Timer::new(Duration::from_secs(60), Duration::from_secs(5));
        timer.start();
        assert!(timer.deadline().is_some());
        assert!(!timer.expired());
        assert!(!timer.warns());
        assert!(timer.remaining().unwrap() <= timer.timeout());
    }

    #[tokio::test]
    async fn timer_expires() {
        let mut timer = Timer::new(Duration::from_millis(10), Duration::from_millis(10));
        timer.start();
        assert!(timer.warns());
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(timer.expired());
        assert_eq!(timer.remaining(), Some(Duration::ZERO));
    }

    #[test]
    fn timer_clears() {
        let mut timer = Timer::new(Duration::from_secs(1), Duration::ZERO);
        timer.start();
        timer.clear();
        assert!(timer.deadline().is_none());
    }
}
