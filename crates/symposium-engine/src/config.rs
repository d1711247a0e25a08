//! Table configuration, validation, and error types.
//!
//! [`TableConfig`] is the input for constructing or reconfiguring a
//! [`Simulation`](crate::Simulation). [`validate()`](TableConfig::validate)
//! checks every structural invariant up front so that a rejected
//! configuration never leaves the engine partially reconfigured.

use std::error::Error;
use std::fmt;

use symposium_core::{Ring, RingError, Strategy, StrategyCycle};

use crate::scheduler::SchedulerKind;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`TableConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The agent count cannot form a seating ring.
    Ring(RingError),
    /// `tick_seconds` is NaN, infinite, zero, or negative.
    InvalidTickSeconds {
        /// The invalid value.
        value: f64,
    },
    /// `starvation_threshold_seconds` is NaN, infinite, zero, or negative.
    InvalidStarvationThreshold {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ring(e) => write!(f, "ring: {e}"),
            Self::InvalidTickSeconds { value } => {
                write!(f, "tick_seconds must be finite and positive, got {value}")
            }
            Self::InvalidStarvationThreshold { value } => {
                write!(
                    f,
                    "starvation_threshold_seconds must be finite and positive, got {value}"
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ring(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RingError> for ConfigError {
    fn from(e: RingError) -> Self {
        Self::Ring(e)
    }
}

// ── TableConfig ────────────────────────────────────────────────────

/// Complete configuration for a dining table.
///
/// Changing `agent_count` through
/// [`Simulation::configure`](crate::Simulation::configure) rebuilds every
/// agent and fork; the other fields take effect from the next tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TableConfig {
    /// Number of agents (and forks). Minimum: 3. Default: 5.
    pub agent_count: usize,
    /// Simulated seconds a thinking agent waits per tick. Default: 1.0.
    pub tick_seconds: f64,
    /// Wait time at which a thinking agent starves. Default: 10.0.
    pub starvation_threshold_seconds: f64,
    /// Rule choosing which agent acts each tick. Default: round-robin.
    pub scheduler: SchedulerKind,
    /// Strategy given to every agent on (re)configuration. Default: normal.
    pub default_strategy: Strategy,
    /// Order used by [`Simulation::cycle_strategy`](crate::Simulation::cycle_strategy).
    pub strategy_cycle: StrategyCycle,
    /// RNG seed for the random scheduler. Default: 42.
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            agent_count: 5,
            tick_seconds: 1.0,
            starvation_threshold_seconds: 10.0,
            scheduler: SchedulerKind::RoundRobin,
            default_strategy: Strategy::Normal,
            strategy_cycle: StrategyCycle::NormalGreedy,
            seed: 42,
        }
    }
}

impl TableConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.ring()?;
        // Subnormal tick lengths make threshold / tick_seconds overflow.
        if !self.tick_seconds.is_finite()
            || self.tick_seconds <= 0.0
            || !(1.0 / self.tick_seconds).is_finite()
        {
            return Err(ConfigError::InvalidTickSeconds {
                value: self.tick_seconds,
            });
        }
        if !self.starvation_threshold_seconds.is_finite() || self.starvation_threshold_seconds <= 0.0
        {
            return Err(ConfigError::InvalidStarvationThreshold {
                value: self.starvation_threshold_seconds,
            });
        }
        Ok(())
    }

    /// Build the seating ring for `agent_count`.
    pub fn ring(&self) -> Result<Ring, ConfigError> {
        Ok(Ring::new(self.agent_count)?)
    }

    /// Number of consecutive thinking ticks before an agent starves:
    /// `ceil(threshold / tick_seconds)`, at least 1.
    ///
    /// A quotient within a relative `1e-9` of an integer counts as that
    /// integer, so `6.0 / 0.3` (which evaluates a few ulps above 20) is 20.
    pub fn ticks_to_starve(&self) -> u64 {
        let ratio = self.starvation_threshold_seconds / self.tick_seconds;
        let nearest = ratio.round();
        let ticks = if (ratio - nearest).abs() <= nearest.max(1.0) * 1e-9 {
            nearest
        } else {
            ratio.ceil()
        };
        (ticks as u64).max(1)
    }
}
