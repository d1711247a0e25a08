//! Benchmark profiles for the Symposium simulation engine.
//!
//! Provides pre-built [`TableConfig`] profiles for benchmarks and demos:
//!
//! - [`reference_profile`]: the default five-seat table under round-robin
//! - [`large_table_profile`]: 1000 seats under the random scheduler
//! - [`deadlock_profile`]: an all-greedy table for deadlock-seeded runs
//! - [`mixed_strategies`]: deterministic strategy assignment via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use symposium_core::{AgentId, Strategy};
use symposium_engine::{SchedulerKind, Simulation, TableConfig};

/// The default table: 5 seats, 1 s ticks, 10 s threshold, round-robin.
pub fn reference_profile(seed: u64) -> TableConfig {
    TableConfig {
        seed,
        ..TableConfig::default()
    }
}

/// 1000 seats under the random scheduler with a generous threshold.
pub fn large_table_profile(seed: u64) -> TableConfig {
    TableConfig {
        agent_count: 1000,
        starvation_threshold_seconds: 5_000.0,
        scheduler: SchedulerKind::Random,
        seed,
        ..TableConfig::default()
    }
}

/// `n` greedy seats; pair with [`Simulation::reset_with_deadlock`].
pub fn deadlock_profile(n: usize, scheduler: SchedulerKind) -> TableConfig {
    TableConfig {
        agent_count: n,
        scheduler,
        default_strategy: Strategy::Greedy,
        ..TableConfig::default()
    }
}

/// Assign every agent a strategy derived from `seed`.
///
/// Uses a SplitMix64 step per seat so the assignment is stable across
/// runs and platforms. Returns the strategies in seat order.
pub fn mixed_strategies(sim: &mut Simulation, seed: u64) -> Vec<Strategy> {
    const STRATEGIES: [Strategy; 3] = [Strategy::Normal, Strategy::Polite, Strategy::Greedy];
    let n = sim.snapshot().agent_count();
    let mut state = seed;
    let mut assigned = Vec::with_capacity(n);
    for i in 0..n {
        state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        let strategy = STRATEGIES[(z % 3) as usize];
        sim.set_strategy(AgentId(i as u32), strategy).expect("seat in range");
        assigned.push(strategy);
    }
    assigned
}
