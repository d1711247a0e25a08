//! Read-only views of table state.
//!
//! A [`TableSnapshot`] borrows from the engine, so the borrow checker
//! rejects any attempt to tick while a snapshot is alive. Queries never
//! mutate state.

use symposium_core::{Agent, AgentId, AgentState, Fork, ForkId, Ring, TableError, TickId};

use crate::config::TableConfig;

/// Borrowed, read-only view of every agent and fork after the last tick.
#[derive(Clone, Copy, Debug)]
pub struct TableSnapshot<'a> {
    config: &'a TableConfig,
    ring: &'a Ring,
    agents: &'a [Agent],
    forks: &'a [Fork],
    tick: TickId,
}

impl<'a> TableSnapshot<'a> {
    pub(crate) fn new(
        config: &'a TableConfig,
        ring: &'a Ring,
        agents: &'a [Agent],
        forks: &'a [Fork],
        tick: TickId,
    ) -> Self {
        Self {
            config,
            ring,
            agents,
            forks,
            tick,
        }
    }

    /// The tick this view reflects (0 after construction or reset).
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Number of agents (and forks).
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// The seating ring.
    pub fn ring(&self) -> &'a Ring {
        self.ring
    }

    /// The configured starvation threshold, in seconds.
    pub fn starvation_threshold_seconds(&self) -> f64 {
        self.config.starvation_threshold_seconds
    }

    /// One agent's record.
    pub fn agent(&self, agent: AgentId) -> Result<&'a Agent, TableError> {
        let agent = self.ring.check_agent(agent)?;
        Ok(&self.agents[agent.index()])
    }

    /// Every agent in index order.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &'a Agent)> + 'a {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, a)| (AgentId(i as u32), a))
    }

    /// The agent holding `fork`, if any.
    pub fn fork_owner(&self, fork: ForkId) -> Result<Option<AgentId>, TableError> {
        let fork = self.ring.check_fork(fork)?;
        Ok(self.forks[fork.index()].owner())
    }

    /// Whether any agent holds `fork`.
    pub fn is_fork_held(&self, fork: ForkId) -> Result<bool, TableError> {
        Ok(self.fork_owner(fork)?.is_some())
    }

    /// Every fork's owner in index order.
    pub fn forks(&self) -> impl Iterator<Item = (ForkId, Option<AgentId>)> + 'a {
        self.forks
            .iter()
            .enumerate()
            .map(|(i, f)| (ForkId(i as u32), f.owner()))
    }

    /// Forks currently held by `agent`, in `[left, right]` order.
    pub fn forks_held_by(&self, agent: AgentId) -> Result<Vec<ForkId>, TableError> {
        let agent = self.ring.check_agent(agent)?;
        Ok(self
            .ring
            .forks_of(agent)
            .into_iter()
            .filter(|f| self.forks[f.index()].is_held_by(agent))
            .collect())
    }

    /// Seconds before `agent` starves; `None` if it is already dead.
    pub fn time_until_starvation(&self, agent: AgentId) -> Result<Option<f64>, TableError> {
        Ok(self
            .agent(agent)?
            .time_until_starvation(self.config.starvation_threshold_seconds))
    }

    /// Mean thinking interval before each of `agent`'s meals.
    pub fn average_thinking_time(&self, agent: AgentId) -> Result<Option<f64>, TableError> {
        Ok(self.agent(agent)?.average_thinking_time())
    }

    /// Whether every agent has starved.
    pub fn all_dead(&self) -> bool {
        self.agents.iter().all(|a| a.state == AgentState::Dead)
    }

    /// Whether at least one agent is eating.
    pub fn any_eating(&self) -> bool {
        self.agents.iter().any(|a| a.state == AgentState::Eating)
    }

    /// Number of agents in `state`.
    pub fn count_in(&self, state: AgentState) -> usize {
        self.agents.iter().filter(|a| a.state == state).count()
    }
}
