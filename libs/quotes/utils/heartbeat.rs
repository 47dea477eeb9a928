//! Periodic status logging for long-running processes

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Fires at most once per interval
#[derive(Debug, Clone)]
pub struct Heartbeat {
    interval: Duration,
    last_beat: DateTime<Utc>,
    beats: u64,
}

impl Heartbeat {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_beat: Utc::now(),
            beats: 0,
        }
    }

    pub fn should_beat(&self) -> bool {
        self.should_beat_at(Utc::now())
    }

    fn should_beat_at(&self, now: DateTime<Utc>) -> bool {
        let elapsed = now.signed_duration_since(self.last_beat);
        elapsed.to_std().unwrap_or_default() >= self.interval
    }

    /// Beat if due, returning whether it did
    pub fn tick(&mut self) -> bool {
        let now = Utc::now();
        if self.should_beat_at(now) {
            self.last_beat = now;
            self.beats += 1;
            true
        } else {
            false
        }
    }

    pub fn last_beat(&self) -> DateTime<Utc> {
        self.last_beat
    }

    /// Number of beats so far
    pub fn beats(&self) -> u64 {
        self.beats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_immediately() {
        let mut heartbeat = Heartbeat::new(Duration::from_secs(60));
        assert!(!heartbeat.should_beat());
        assert!(!heartbeat.tick());
        assert_eq!(heartbeat.beats(), 0);
    }

    #[test]
    fn test_zero_interval_always_due() {
        let mut heartbeat = Heartbeat::new(Duration::ZERO);
        assert!(heartbeat.tick());
        assert!(heartbeat.tick());
        assert_eq!(heartbeat.beats(), 2);
    }

    #[test]
    fn test_due_after_interval() {
        let heartbeat = Heartbeat::new(Duration::from_secs(30));
        let later = heartbeat.last_beat() + chrono::Duration::seconds(31);
        assert!(heartbeat.should_beat_at(later));
    }
}
