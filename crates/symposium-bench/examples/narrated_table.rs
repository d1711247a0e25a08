//! Narrated dining table.
//!
//! Demonstrates: build config → Simulation → tick with narration → inspect
//! statistics → deadlock reset → run to starvation.
//!
//! Set `RUST_LOG=symposium_engine=debug` for per-tick engine logs.

use symposium_bench::reference_profile;
use symposium_core::{AgentId, Strategy};
use symposium_engine::Simulation;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Symposium Narrated Table ===\n");

    let mut sim = Simulation::new(reference_profile(42)).unwrap();
    sim.set_strategy(AgentId(2), Strategy::Greedy).unwrap();

    println!("Episode 1: 20 ticks, philosopher 3 greedy");
    for report in sim.run(20) {
        println!("  {report}");
    }

    println!("\nStatistics:");
    let snap = sim.snapshot();
    for (id, agent) in snap.agents() {
        let avg = agent
            .average_thinking_time()
            .map_or_else(|| "N/A".to_string(), |t| format!("{t:.1}s"));
        let left = snap
            .time_until_starvation(id)
            .ok()
            .flatten()
            .map_or_else(|| "-".to_string(), |t| format!("{t:.1}s"));
        println!(
            "  Philosopher {}: {:?} ({}) eaten={} failed={} avg_think={} starves_in={}",
            id.number(),
            agent.state,
            agent.strategy,
            agent.eaten_count,
            agent.failed_attempt_count,
            avg,
            left,
        );
    }

    println!("\nEpisode 2: every philosopher greedy, deadlock reset");
    for i in 0..5 {
        sim.set_strategy(AgentId(i), Strategy::Greedy).unwrap();
    }
    println!("  {}", sim.reset_with_deadlock());
    while !sim.snapshot().all_dead() {
        let report = sim.tick();
        for line in report.narrations() {
            println!("  [tick {}] {line}", report.tick_id);
        }
    }
    let m = sim.last_metrics();
    println!(
        "\nDone: meals={} failed={} deaths={}",
        m.meals, m.failed_attempts, m.deaths
    );
}
