//! Reusable table configurations.

use symposium_core::Strategy;
use symposium_engine::{SchedulerKind, Simulation, TableConfig};

/// `n` agents with one-second ticks and a ten-second threshold.
pub fn table(n: usize, scheduler: SchedulerKind, strategy: Strategy) -> TableConfig {
    TableConfig {
        agent_count: n,
        tick_seconds: 1.0,
        starvation_threshold_seconds: 10.0,
        scheduler,
        default_strategy: strategy,
        ..TableConfig::default()
    }
}

/// Three normal agents under round-robin.
pub fn scenario_three_round_robin() -> TableConfig {
    table(3, SchedulerKind::RoundRobin, Strategy::Normal)
}

/// An all-greedy table already seeded into the symmetric deadlock.
pub fn all_greedy(n: usize, scheduler: SchedulerKind) -> Simulation {
    let mut sim = Simulation::new(table(n, scheduler, Strategy::Greedy))
        .expect("fixture config is valid");
    sim.reset_with_deadlock();
    sim
}
