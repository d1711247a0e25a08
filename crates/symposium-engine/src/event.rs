//! Per-tick outcomes and their human-readable narration.
//!
//! Every [`TickReport`] carries exactly one primary description. The
//! selected agent's action outcome takes priority over a same-tick
//! starvation, unless the action was inert (the selected agent was already
//! dead), in which case the lowest-index starvation is narrated instead.

use std::fmt;

use smallvec::SmallVec;
use symposium_core::{AgentId, TickId};

use crate::metrics::StepMetrics;

/// Narration returned by [`Simulation::reset`](crate::Simulation::reset).
pub const RESET_NARRATION: &str = "Simulation reset. All philosophers are thinking.";

/// Narration returned by
/// [`Simulation::reset_with_deadlock`](crate::Simulation::reset_with_deadlock).
pub const DEADLOCK_RESET_NARRATION: &str =
    "Simulation reset. All greedy philosophers are holding a fork.";

/// What the selected agent did this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Took both forks and began eating.
    StartedEating {
        /// The acting agent.
        agent: AgentId,
    },
    /// Released both forks and returned to thinking.
    FinishedEating {
        /// The acting agent.
        agent: AgentId,
    },
    /// A non-greedy agent could not take both forks and took neither.
    FailedToEat {
        /// The acting agent.
        agent: AgentId,
    },
    /// A greedy agent could not eat and grabbed whatever forks were free.
    GreedyWaiting {
        /// The acting agent.
        agent: AgentId,
        /// Forks picked up during this action (0 or 1).
        picked_up: u8,
        /// Forks held after the pickup (0, 1 or 2).
        holding: u8,
    },
    /// The selected agent is dead; nothing changed.
    Inert {
        /// The selected agent.
        agent: AgentId,
    },
}

impl ActionOutcome {
    /// The agent that was selected to act.
    pub fn agent(&self) -> AgentId {
        match *self {
            Self::StartedEating { agent }
            | Self::FinishedEating { agent }
            | Self::FailedToEat { agent }
            | Self::GreedyWaiting { agent, .. }
            | Self::Inert { agent } => agent,
        }
    }

    /// Whether this outcome counts as a failed eating attempt.
    pub fn is_failed_attempt(&self) -> bool {
        matches!(self, Self::FailedToEat { .. } | Self::GreedyWaiting { .. })
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::StartedEating { agent } => {
                write!(f, "Philosopher {} started eating.", agent.number())
            }
            Self::FinishedEating { agent } => write!(
                f,
                "Philosopher {} finished eating and is now thinking.",
                agent.number()
            ),
            Self::FailedToEat { agent } => write!(
                f,
                "Philosopher {} tried to eat but couldn't get both forks.",
                agent.number()
            ),
            Self::GreedyWaiting {
                agent,
                picked_up,
                holding,
            } => {
                let n = agent.number();
                match (picked_up, holding) {
                    (_, 2) => write!(
                        f,
                        "Greedy Philosopher {n} picked up its second fork and is ready to eat."
                    ),
                    (1, _) => write!(
                        f,
                        "Greedy Philosopher {n} picked up one fork and is waiting for the other."
                    ),
                    (_, 1) => write!(
                        f,
                        "Greedy Philosopher {n} is holding one fork and waiting for the other."
                    ),
                    _ => write!(f, "Greedy Philosopher {n} is waiting for both forks."),
                }
            }
            Self::Inert { agent } => {
                write!(f, "Philosopher {} is dead and cannot act.", agent.number())
            }
        }
    }
}

/// Narration for a starvation death.
pub fn starvation_narration(agent: AgentId) -> String {
    format!("Philosopher {} has starved to death!", agent.number())
}

/// Everything that happened during one tick.
#[derive(Clone, Debug)]
pub struct TickReport {
    /// The tick this report describes (1 for the first tick after reset).
    pub tick_id: TickId,
    /// The agent the scheduler selected.
    pub selected: AgentId,
    /// What the selected agent did.
    pub outcome: ActionOutcome,
    /// Agents that starved this tick, in ascending index order.
    pub starved: SmallVec<[AgentId; 4]>,
    /// Metrics for this tick.
    pub metrics: StepMetrics,
}

impl TickReport {
    /// The single primary narration for this tick.
    pub fn description(&self) -> String {
        match (&self.outcome, self.starved.first()) {
            (ActionOutcome::Inert { .. }, Some(&agent)) => starvation_narration(agent),
            (outcome, _) => outcome.to_string(),
        }
    }

    /// Every narration this tick produced: the action, then each death.
    pub fn narrations(&self) -> Vec<String> {
        std::iter::once(self.outcome.to_string())
            .chain(self.starved.iter().map(|&a| starvation_narration(a)))
            .collect()
    }
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[tick {}] {}", self.tick_id, self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn report(outcome: ActionOutcome, starved: SmallVec<[AgentId; 4]>) -> TickReport {
        TickReport {
            tick_id: TickId(1),
            selected: outcome.agent(),
            outcome,
            starved,
            metrics: StepMetrics::default(),
        }
    }

    #[test]
    fn narration_numbers_from_one() {
        let o = ActionOutcome::StartedEating { agent: AgentId(2) };
        assert_eq!(o.to_string(), "Philosopher 3 started eating.");
        let o = ActionOutcome::FinishedEating { agent: AgentId(0) };
        assert_eq!(o.to_string(), "Philosopher 1 finished eating and is now thinking.");
        let o = ActionOutcome::FailedToEat { agent: AgentId(4) };
        assert_eq!(
            o.to_string(),
            "Philosopher 5 tried to eat but couldn't get both forks."
        );
    }

    #[test]
    fn greedy_narrations() {
        let a = AgentId(1);
        let picked = ActionOutcome::GreedyWaiting {
            agent: a,
            picked_up: 1,
            holding: 1,
        };
        assert_eq!(
            picked.to_string(),
            "Greedy Philosopher 2 picked up one fork and is waiting for the other."
        );
        let holding = ActionOutcome::GreedyWaiting {
            agent: a,
            picked_up: 0,
            holding: 1,
        };
        assert!(holding.to_string().contains("is holding one fork"));
        let empty = ActionOutcome::GreedyWaiting {
            agent: a,
            picked_up: 0,
            holding: 0,
        };
        assert_eq!(
            empty.to_string(),
            "Greedy Philosopher 2 is waiting for both forks."
        );
        let ready = ActionOutcome::GreedyWaiting {
            agent: a,
            picked_up: 1,
            holding: 2,
        };
        assert!(ready.to_string().contains("ready to eat"));
    }

    #[test]
    fn action_outranks_starvation() {
        let r = report(
            ActionOutcome::FailedToEat { agent: AgentId(0) },
            smallvec![AgentId(4)],
        );
        assert_eq!(
            r.description(),
            "Philosopher 1 tried to eat but couldn't get both forks."
        );
        assert_eq!(r.narrations().len(), 2);
    }

    #[test]
    fn starvation_narrated_when_action_inert() {
        let r = report(
            ActionOutcome::Inert { agent: AgentId(0) },
            smallvec![AgentId(2), AgentId(4)],
        );
        assert_eq!(r.description(), "Philosopher 3 has starved to death!");
    }

    #[test]
    fn inert_without_starvation() {
        let r = report(ActionOutcome::Inert { agent: AgentId(1) }, smallvec![]);
        assert_eq!(r.description(), "Philosopher 2 is dead and cannot act.");
        assert_eq!(r.to_string(), "[tick 1] Philosopher 2 is dead and cannot act.");
    }

    #[test]
    fn failed_attempt_classification() {
        assert!(ActionOutcome::FailedToEat { agent: AgentId(0) }.is_failed_attempt());
        assert!(ActionOutcome::GreedyWaiting {
            agent: AgentId(0),
            picked_up: 0,
            holding: 0
        }
        .is_failed_attempt());
        assert!(!ActionOutcome::StartedEating { agent: AgentId(0) }.is_failed_attempt());
        assert!(!ActionOutcome::Inert { agent: AgentId(0) }.is_failed_attempt());
    }
}
