//! Frame clock driven by host-provided timestamps

/// Turns monotonically increasing frame timestamps (milliseconds) into
/// per-tick delta time (seconds)
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Time since last tick in seconds
    pub delta_time: f64,
    /// Timestamp of the previous tick in milliseconds
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to `timestamp_ms` and return the delta in seconds.
    /// The first tick has no previous frame and yields zero.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        self.delta_time = match self.last_timestamp {
            Some(last) => (timestamp_ms - last) / 1000.0,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        self.delta_time
    }

    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(1234.0), 0.0);
        assert_eq!(clock.last_timestamp(), Some(1234.0));
    }

    #[test]
    fn test_delta_in_seconds() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        let dt = clock.tick(1016.0);
        assert!((dt - 0.016).abs() < 1e-9);
        let dt = clock.tick(1050.0);
        assert!((dt - 0.034).abs() < 1e-9);
        assert_eq!(clock.delta_time, dt);
    }
}
