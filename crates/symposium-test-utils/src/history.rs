//! Multi-tick recording for conservation and fairness properties.

use symposium_core::{AgentId, AgentState};
use symposium_engine::{Simulation, TickReport};

use crate::invariants::check_invariants;

/// Per-tick state sequence of every agent, plus the reports that produced it.
#[derive(Debug, Default)]
pub struct History {
    /// `states[t][i]`: agent `i`'s state after tick `t + 1`.
    pub states: Vec<Vec<AgentState>>,
    /// `eaten[t][i]`: agent `i`'s eaten count after tick `t + 1`.
    pub eaten: Vec<Vec<u64>>,
    /// Reports in tick order.
    pub reports: Vec<TickReport>,
}

impl History {
    /// Run `ticks` ticks, checking invariants after each one.
    ///
    /// Returns the first invariant violation as `Err`.
    pub fn record(sim: &mut Simulation, ticks: usize) -> Result<Self, String> {
        let mut history = Self::default();
        for _ in 0..ticks {
            let report = sim.tick();
            let snap = sim.snapshot();
            check_invariants(&snap, false)
                .map_err(|e| format!("tick {}: {e}", snap.tick_id()))?;
            history.states.push(snap.agents().map(|(_, a)| a.state).collect());
            history.eaten.push(snap.agents().map(|(_, a)| a.eaten_count).collect());
            history.reports.push(report);
        }
        Ok(history)
    }

    /// Agents selected, in tick order.
    pub fn selections(&self) -> Vec<AgentId> {
        self.reports.iter().map(|r| r.selected).collect()
    }

    /// Number of `Thinking -> Eating` transitions observed for `agent`,
    /// given its state before the first recorded tick.
    pub fn meals_observed(&self, agent: AgentId, initial: AgentState) -> u64 {
        let mut prev = initial;
        let mut meals = 0;
        for row in &self.states {
            let now = row[agent.index()];
            if prev == AgentState::Thinking && now == AgentState::Eating {
                meals += 1;
            }
            prev = now;
        }
        meals
    }

    /// Whether any agent was ever eating.
    pub fn anyone_ate(&self) -> bool {
        self.states
            .iter()
            .any(|row| row.contains(&AgentState::Eating))
    }
}
