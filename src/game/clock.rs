//! Blocking pauses, abstracted so the death pause can be simulated.

use std::time::Duration;

use crate::platform;

/// A source of blocking pauses.
pub trait Clock {
    /// Blocks for `duration`. Nothing else in the game runs meanwhile.
    fn pause(&mut self, duration: Duration);
}

/// Pauses on the real wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn pause(&mut self, duration: Duration) {
        platform::sleep(duration);
    }
}

/// A clock that never blocks and only records what it was asked to wait for.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    pub paused: Vec<Duration>,
}

impl ManualClock {
    pub fn total(&self) -> Duration {
        self.paused.iter().sum()
    }
}

impl Clock for ManualClock {
    fn pause(&mut self, duration: Duration) {
        self.paused.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_records_pauses() {
        let mut clock = ManualClock::default();
        clock.pause(Duration::from_secs(2));
        clock.pause(Duration::from_millis(500));
        assert_eq!(clock.paused.len(), 2);
        assert_eq!(clock.total(), Duration::from_millis(2_500));
    }
}
