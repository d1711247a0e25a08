//! Agent lifecycle state, contention strategy, and per-agent counters.

use std::fmt;

/// Lifecycle state of an agent.
///
/// `Thinking <-> Eating` alternate; `Dead` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AgentState {
    /// Waiting to eat; accrues wait time every tick.
    #[default]
    Thinking,
    /// Holding both forks; never accrues wait time.
    Eating,
    /// Starved. Holds no forks and never transitions again.
    Dead,
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Thinking => "thinking",
            Self::Eating => "eating",
            Self::Dead => "dead",
        };
        f.write_str(s)
    }
}

/// An agent's policy for contending on forks when it cannot take both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Never holds a single fork: eats only when both are free.
    #[default]
    Normal,
    /// Reserved for a future back-off policy; acquires exactly like `Normal`.
    Polite,
    /// Holds onto any fork it can get while waiting for the other.
    Greedy,
}

impl Strategy {
    /// Whether this strategy picks up single forks on a failed attempt.
    pub fn takes_partial(self) -> bool {
        matches!(self, Self::Greedy)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Normal => "normal",
            Self::Polite => "polite",
            Self::Greedy => "greedy",
        };
        f.write_str(s)
    }
}

/// The order a host control steps an agent through strategies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StrategyCycle {
    /// `Normal -> Greedy -> Normal`. A `Polite` agent steps to `Greedy`.
    #[default]
    NormalGreedy,
    /// `Normal -> Polite -> Greedy -> Normal`.
    NormalPoliteGreedy,
}

impl StrategyCycle {
    /// The strategy after `current` in this cycle.
    pub fn next(self, current: Strategy) -> Strategy {
        match (self, current) {
            (Self::NormalGreedy, Strategy::Normal) => Strategy::Greedy,
            (Self::NormalGreedy, Strategy::Polite) => Strategy::Greedy,
            (Self::NormalGreedy, Strategy::Greedy) => Strategy::Normal,
            (Self::NormalPoliteGreedy, Strategy::Normal) => Strategy::Polite,
            (Self::NormalPoliteGreedy, Strategy::Polite) => Strategy::Greedy,
            (Self::NormalPoliteGreedy, Strategy::Greedy) => Strategy::Normal,
        }
    }
}

/// Per-agent simulation record.
///
/// All counters are monotonic between resets. `wait_timer` is the time
/// (seconds) since the agent last began thinking; it is zero while eating
/// and frozen once dead.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    /// Current lifecycle state.
    pub state: AgentState,
    /// Current contention strategy.
    pub strategy: Strategy,
    /// Seconds since the agent last began thinking: `wait_ticks * tick_seconds`.
    pub wait_timer: f64,
    /// Whole ticks since the agent last began thinking. Starvation compares
    /// this count, not `wait_timer`.
    pub wait_ticks: u64,
    /// Number of `Thinking -> Eating` transitions.
    pub eaten_count: u64,
    /// Number of selections where the agent was thinking and could not eat.
    pub failed_attempt_count: u64,
    /// Cumulative seconds spent thinking, credited when eating begins.
    pub total_thinking_time: f64,
}

impl Agent {
    /// A fresh thinking agent with zeroed timers and counters.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            state: AgentState::Thinking,
            strategy,
            wait_timer: 0.0,
            wait_ticks: 0,
            eaten_count: 0,
            failed_attempt_count: 0,
            total_thinking_time: 0.0,
        }
    }

    /// Mean thinking interval before each meal.
    ///
    /// `None` until the agent has eaten at least once.
    pub fn average_thinking_time(&self) -> Option<f64> {
        if self.eaten_count == 0 {
            None
        } else {
            Some(self.total_thinking_time / self.eaten_count as f64)
        }
    }

    /// Seconds left before this agent starves, clamped at zero.
    ///
    /// `None` for a dead agent.
    pub fn time_until_starvation(&self, threshold_seconds: f64) -> Option<f64> {
        match self.state {
            AgentState::Dead => None,
            _ => Some((threshold_seconds - self.wait_timer).max(0.0)),
        }
    }

    /// Whether the agent is still alive.
    pub fn is_alive(&self) -> bool {
        self.state != AgentState::Dead
    }
}
