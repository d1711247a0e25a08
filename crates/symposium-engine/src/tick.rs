//! Tick engine: the single-threaded, turn-based simulation step.
//!
//! [`TickEngine`] owns every agent and fork and applies one tick as three
//! ordered phases:
//!
//! 1. **Selection**: the scheduler picks exactly one agent.
//! 2. **Action**: the selected agent tries to eat, finishes eating, or
//!    (if dead) does nothing. Fork ownership only changes here.
//! 3. **Time advance and starvation**: every thinking agent accrues one
//!    tick (`tick_seconds`) of wait, eating agents stay at zero, and any
//!    live agent that has waited
//!    [`ticks_to_starve`](TableConfig::ticks_to_starve) ticks dies and
//!    drops its forks.
//!
//! Selection and action run before the time advance, so an agent that
//! starts eating this tick has its timer zeroed before, not after, time
//! moves on. All three phases run inside one `&mut self` call, so no
//! observer can see a partially applied tick.

use std::time::Instant;

use smallvec::SmallVec;
use symposium_core::{
    Agent, AgentId, AgentState, Fork, ForkId, Ring, Strategy, TableError, TickId,
};
use tracing::{debug, info, trace};

use crate::config::{ConfigError, TableConfig};
use crate::event::{ActionOutcome, TickReport};
use crate::metrics::StepMetrics;
use crate::scheduler::{Scheduler, SchedulerKind};
use crate::snapshot::TableSnapshot;

/// Single-threaded tick engine.
///
/// Owns all simulation state and executes ticks synchronously. Prefer
/// [`Simulation`](crate::Simulation) as the host-facing API; this type is
/// exposed for callers that manage configuration themselves.
#[derive(Clone, Debug)]
pub struct TickEngine {
    config: TableConfig,
    ring: Ring,
    agents: Vec<Agent>,
    forks: Vec<Fork>,
    scheduler: Scheduler,
    current_tick: TickId,
    meals: u64,
    failed_attempts: u64,
    deaths: u64,
    last_metrics: StepMetrics,
}

impl TickEngine {
    /// Construct a new engine from a [`TableConfig`].
    ///
    /// Validates the configuration and seats `agent_count` thinking agents,
    /// all with the configured default strategy, around unowned forks.
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ring = config.ring()?;
        let agents = vec![Agent::new(config.default_strategy); ring.seats()];
        let forks = vec![Fork::new(); ring.seats()];
        let scheduler = Scheduler::new(config.scheduler, config.seed);
        Ok(Self {
            config,
            ring,
            agents,
            forks,
            scheduler,
            current_tick: TickId(0),
            meals: 0,
            failed_attempts: 0,
            deaths: 0,
            last_metrics: StepMetrics::default(),
        })
    }

    // ── Lifecycle ──────────────────────────────────────────────

    /// Return every agent to `Thinking` with zeroed timers and counters,
    /// free every fork, and clear the scheduler cursor.
    ///
    /// Strategies are kept. The random scheduler restarts from the
    /// configured seed.
    pub fn reset(&mut self) {
        for agent in &mut self.agents {
            *agent = Agent::new(agent.strategy);
        }
        for fork in &mut self.forks {
            fork.release();
        }
        self.scheduler.reset(self.config.seed);
        self.current_tick = TickId(0);
        self.meals = 0;
        self.failed_attempts = 0;
        self.deaths = 0;
        self.last_metrics = StepMetrics::default();
    }

    /// [`reset()`](Self::reset), then hand every greedy agent its own left
    /// fork while it stays `Thinking`.
    ///
    /// With every agent greedy this is the canonical symmetric deadlock:
    /// each agent holds exactly one fork and its neighbour holds the other.
    pub fn reset_with_deadlock(&mut self) {
        self.reset();
        for agent in self.ring.agents() {
            if self.agents[agent.index()].strategy == Strategy::Greedy {
                let left = self.ring.left_fork(agent);
                self.forks[left.index()].acquire(agent);
            }
        }
    }

    /// Change one agent's strategy without touching any other state.
    pub fn set_strategy(&mut self, agent: AgentId, strategy: Strategy) -> Result<(), TableError> {
        let agent = self.ring.check_agent(agent)?;
        self.agents[agent.index()].strategy = strategy;
        Ok(())
    }

    /// Switch the selection policy without resetting.
    pub fn set_scheduler(&mut self, kind: SchedulerKind) {
        self.config.scheduler = kind;
        self.scheduler.set_kind(kind);
    }

    /// Restart the random scheduler's stream from `seed` and use `seed`
    /// for later resets.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.scheduler.reseed(seed);
    }

    // ── Tick ───────────────────────────────────────────────────

    /// Execute one tick: select, act, then advance time and apply starvation.
    pub fn execute_tick(&mut self) -> TickReport {
        let start = Instant::now();

        // Phase 1: selection.
        let selected = self.scheduler.select(&self.ring, &self.agents);

        // Phase 2: action.
        let outcome = self.act(selected);

        // Phase 3: time advance, then starvation.
        self.advance_time();
        let starved = self.apply_starvation();

        self.current_tick = self.current_tick.next();

        #[cfg(debug_assertions)]
        self.assert_invariants();

        let mut metrics = self.census();
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.last_metrics = metrics.clone();

        debug!(
            tick = self.current_tick.0,
            selected = selected.0,
            ?outcome,
            starved = starved.len(),
            "tick executed"
        );

        TickReport {
            tick_id: self.current_tick,
            selected,
            outcome,
            starved,
            metrics,
        }
    }

    /// Apply the selected agent's rule for its current state.
    fn act(&mut self, agent: AgentId) -> ActionOutcome {
        match self.agents[agent.index()].state {
            AgentState::Thinking => self.try_eat(agent),
            AgentState::Eating => self.finish_eating(agent),
            AgentState::Dead => ActionOutcome::Inert { agent },
        }
    }

    fn try_eat(&mut self, agent: AgentId) -> ActionOutcome {
        let [left, right] = self.ring.forks_of(agent);
        let strategy = self.agents[agent.index()].strategy;

        let can_eat_free = !self.fork(left).is_held() && !self.fork(right).is_held();
        // Greedy eligibility is "owns both outright". Owning one with the
        // other free is a failed attempt plus a pickup, not a meal.
        let can_eat_held = strategy == Strategy::Greedy
            && self.fork(left).is_held_by(agent)
            && self.fork(right).is_held_by(agent);

        if can_eat_free || can_eat_held {
            self.forks[left.index()].acquire(agent);
            self.forks[right.index()].acquire(agent);
            let a = &mut self.agents[agent.index()];
            a.state = AgentState::Eating;
            a.total_thinking_time += a.wait_timer;
            a.wait_timer = 0.0;
            a.wait_ticks = 0;
            a.eaten_count += 1;
            self.meals += 1;
            trace!(agent = agent.0, left = left.0, right = right.0, "forks acquired");
            return ActionOutcome::StartedEating { agent };
        }

        // The failure is recorded before any pickup, so a greedy agent's
        // counter also moves on the tick it takes its first fork.
        self.agents[agent.index()].failed_attempt_count += 1;
        self.failed_attempts += 1;

        if !strategy.takes_partial() {
            return ActionOutcome::FailedToEat { agent };
        }

        let mut picked_up = 0u8;
        for fork in [left, right] {
            if self.forks[fork.index()].try_acquire(agent) {
                trace!(agent = agent.0, fork = fork.0, "partial pickup");
                picked_up += 1;
            }
        }
        let holding = [left, right]
            .iter()
            .filter(|&&f| self.fork(f).is_held_by(agent))
            .count() as u8;
        ActionOutcome::GreedyWaiting {
            agent,
            picked_up,
            holding,
        }
    }

    fn finish_eating(&mut self, agent: AgentId) -> ActionOutcome {
        for fork in self.ring.forks_of(agent) {
            debug_assert!(
                self.fork(fork).is_held_by(agent),
                "eating agent {agent} does not hold fork {fork}"
            );
            self.forks[fork.index()].release();
        }
        self.agents[agent.index()].state = AgentState::Thinking;
        trace!(agent = agent.0, "forks released");
        ActionOutcome::FinishedEating { agent }
    }

    /// Thinking agents gain one tick of wait; the timer is derived from the
    /// tick count rather than summed.
    fn advance_time(&mut self) {
        let dt = self.config.tick_seconds;
        for agent in &mut self.agents {
            match agent.state {
                AgentState::Thinking => {
                    agent.wait_ticks += 1;
                    agent.wait_timer = agent.wait_ticks as f64 * dt;
                }
                AgentState::Eating => {
                    agent.wait_ticks = 0;
                    agent.wait_timer = 0.0;
                }
                AgentState::Dead => {}
            }
        }
    }

    /// Kill every live agent that has thought for
    /// [`ticks_to_starve`](TableConfig::ticks_to_starve) ticks.
    ///
    /// Each death is independent: release is checked by ownership, so the
    /// order deaths are processed in does not matter.
    fn apply_starvation(&mut self) -> SmallVec<[AgentId; 4]> {
        let limit = self.config.ticks_to_starve();
        let mut starved = SmallVec::new();
        for agent in self.ring.agents() {
            let a = &mut self.agents[agent.index()];
            if a.state == AgentState::Dead || a.wait_ticks < limit {
                continue;
            }
            a.state = AgentState::Dead;
            for fork in self.ring.forks_of(agent) {
                self.forks[fork.index()].release_if_held_by(agent);
            }
            self.deaths += 1;
            info!(
                tick = self.current_tick.next().0,
                agent = agent.0,
                "agent starved"
            );
            starved.push(agent);
        }
        starved
    }

    fn census(&self) -> StepMetrics {
        let mut m = StepMetrics {
            meals: self.meals,
            failed_attempts: self.failed_attempts,
            deaths: self.deaths,
            ..StepMetrics::default()
        };
        for agent in &self.agents {
            match agent.state {
                AgentState::Thinking => m.thinking += 1,
                AgentState::Eating => m.eating += 1,
                AgentState::Dead => m.dead += 1,
            }
        }
        m.forks_held = self.forks.iter().filter(|f| f.is_held()).count() as u32;
        m
    }

    /// Panic if any table invariant is violated.
    ///
    /// Violations are engine defects, never caller errors.
    pub fn assert_invariants(&self) {
        for fork_id in self.ring.forks() {
            let Some(owner) = self.fork(fork_id).owner() else {
                continue;
            };
            assert!(
                self.ring.forks_of(owner).contains(&fork_id),
                "fork {fork_id} owned by non-adjacent agent {owner}"
            );
            assert_ne!(
                self.agents[owner.index()].state,
                AgentState::Dead,
                "fork {fork_id} owned by dead agent {owner}"
            );
        }
        for agent in self.ring.agents() {
            if self.agents[agent.index()].state == AgentState::Eating {
                for fork in self.ring.forks_of(agent) {
                    assert!(
                        self.fork(fork).is_held_by(agent),
                        "eating agent {agent} does not hold fork {fork}"
                    );
                }
            }
        }
    }

    // ── Accessors ──────────────────────────────────────────────

    fn fork(&self, fork: ForkId) -> &Fork {
        &self.forks[fork.index()]
    }

    /// A read-only view of the table.
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        TableSnapshot::new(
            &self.config,
            &self.ring,
            &self.agents,
            &self.forks,
            self.current_tick,
        )
    }

    /// Current tick ID (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// The active configuration.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// The seating ring.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The scheduler's round-robin cursor.
    pub fn cursor(&self) -> Option<AgentId> {
        self.scheduler.cursor()
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}
