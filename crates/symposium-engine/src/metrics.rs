//! Per-tick metrics for the simulation engine.
//!
//! [`StepMetrics`] captures timing, a census of agent states, and
//! cumulative counters after a single tick, for statistics panels and
//! profiling.

/// Timing, census, and cumulative counters collected after a single tick.
///
/// Census fields describe the table after the tick. Cumulative fields
/// count since the last reset or reconfiguration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick, in microseconds.
    pub total_us: u64,
    /// Agents thinking after the tick.
    pub thinking: u32,
    /// Agents eating after the tick.
    pub eating: u32,
    /// Agents dead after the tick.
    pub dead: u32,
    /// Forks with an owner after the tick.
    pub forks_held: u32,
    /// Cumulative `Thinking -> Eating` transitions.
    pub meals: u64,
    /// Cumulative failed eating attempts.
    pub failed_attempts: u64,
    /// Cumulative starvation deaths.
    pub deaths: u64,
}

impl StepMetrics {
    /// Fraction of attempts to eat that failed, or `None` before any attempt.
    pub fn failure_rate(&self) -> Option<f64> {
        let attempts = self.meals + self.failed_attempts;
        if attempts == 0 {
            None
        } else {
            Some(self.failed_attempts as f64 / attempts as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.thinking, 0);
        assert_eq!(m.eating, 0);
        assert_eq!(m.dead, 0);
        assert_eq!(m.forks_held, 0);
        assert_eq!(m.meals, 0);
        assert_eq!(m.failed_attempts, 0);
        assert_eq!(m.deaths, 0);
        assert_eq!(m.failure_rate(), None);
    }

    #[test]
    fn failure_rate_over_all_attempts() {
        let m = StepMetrics {
            meals: 1,
            failed_attempts: 3,
            ..StepMetrics::default()
        };
        assert_eq!(m.failure_rate(), Some(0.75));
    }
}
