//! Lockstep (host-driven) simulation.
//!
//! [`Simulation`] is the primary user-facing API. A host (UI, CLI, test
//! harness) calls [`tick()`](Simulation::tick) at a cadence it owns; the
//! engine never schedules its own timers.
//!
//! # Ownership model
//!
//! Every mutating method takes `&mut self`, and
//! [`snapshot()`](Simulation::snapshot) returns a [`TableSnapshot`] that
//! borrows from `self`. A host therefore cannot run two ticks at once, or
//! tick while holding a snapshot: a periodic driver and a manual "step
//! once" control must share the simulation through exclusive access
//! (pause the driver, then step).

use symposium_core::{AgentId, Strategy, TableError, TickId};
use tracing::info;

use crate::config::{ConfigError, TableConfig};
use crate::event::{TickReport, DEADLOCK_RESET_NARRATION, RESET_NARRATION};
use crate::metrics::StepMetrics;
use crate::scheduler::SchedulerKind;
use crate::snapshot::TableSnapshot;
use crate::tick::TickEngine;

// Compile-time assertion: Simulation can move to a driver thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

/// Single-threaded dining table for lockstep execution.
///
/// # Example
///
/// ```
/// use symposium_engine::{Simulation, TableConfig};
///
/// let mut sim = Simulation::new(TableConfig::default()).unwrap();
/// let report = sim.tick();
/// assert_eq!(report.description(), "Philosopher 1 started eating.");
/// ```
#[derive(Debug)]
pub struct Simulation {
    engine: TickEngine,
}

impl Simulation {
    /// Create a simulation from a [`TableConfig`].
    pub fn new(config: TableConfig) -> Result<Self, ConfigError> {
        let engine = TickEngine::new(config)?;
        info!(
            agents = engine.ring().seats(),
            scheduler = %engine.config().scheduler,
            "simulation created"
        );
        Ok(Self { engine })
    }

    /// Replace the configuration and reset.
    ///
    /// The new configuration is validated first; on error the simulation is
    /// unchanged. On success every agent and fork is rebuilt and every agent
    /// gets the configured default strategy.
    pub fn configure(&mut self, config: TableConfig) -> Result<(), ConfigError> {
        let engine = TickEngine::new(config)?;
        self.engine = engine;
        info!(
            agents = self.engine.ring().seats(),
            tick_seconds = self.engine.config().tick_seconds,
            threshold = self.engine.config().starvation_threshold_seconds,
            scheduler = %self.engine.config().scheduler,
            "simulation reconfigured"
        );
        Ok(())
    }

    /// Reset every agent to thinking with zeroed counters and free every
    /// fork. Strategies are kept.
    pub fn reset(&mut self) -> &'static str {
        self.engine.reset();
        info!("simulation reset");
        RESET_NARRATION
    }

    /// [`reset()`](Self::reset), then give every greedy agent its own left
    /// fork.
    pub fn reset_with_deadlock(&mut self) -> &'static str {
        self.engine.reset_with_deadlock();
        info!("simulation reset with greedy agents holding their left forks");
        DEADLOCK_RESET_NARRATION
    }

    /// Change one agent's strategy without resetting.
    pub fn set_strategy(&mut self, agent: AgentId, strategy: Strategy) -> Result<(), TableError> {
        self.engine.set_strategy(agent, strategy)
    }

    /// Step one agent to the next strategy in the configured cycle.
    ///
    /// Returns the agent's new strategy.
    pub fn cycle_strategy(&mut self, agent: AgentId) -> Result<Strategy, TableError> {
        let current = self.engine.snapshot().agent(agent)?.strategy;
        let next = self.engine.config().strategy_cycle.next(current);
        self.engine.set_strategy(agent, next)?;
        Ok(next)
    }

    /// Switch the selection policy without resetting.
    pub fn set_scheduler(&mut self, kind: SchedulerKind) {
        self.engine.set_scheduler(kind);
    }

    /// Execute one tick.
    pub fn tick(&mut self) -> TickReport {
        self.engine.execute_tick()
    }

    /// Execute `ticks` sequential ticks, returning every report.
    pub fn run(&mut self, ticks: usize) -> Vec<TickReport> {
        (0..ticks).map(|_| self.engine.execute_tick()).collect()
    }

    /// A read-only view of the table.
    pub fn snapshot(&self) -> TableSnapshot<'_> {
        self.engine.snapshot()
    }

    /// Current tick ID (0 after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.engine.current_tick()
    }

    /// The active configuration.
    pub fn config(&self) -> &TableConfig {
        self.engine.config()
    }

    /// Metrics from the most recent tick (zeroed after reset).
    pub fn last_metrics(&self) -> &StepMetrics {
        self.engine.last_metrics()
    }

    /// The current RNG seed.
    pub fn seed(&self) -> u64 {
        self.engine.config().seed
    }

    /// Restart the random scheduler from `seed`; later resets use it too.
    pub fn reseed(&mut self, seed: u64) {
        self.engine.reseed(seed);
    }

    /// The underlying tick engine.
    pub fn engine(&self) -> &TickEngine {
        &self.engine
    }
}
