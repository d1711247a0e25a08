//! Table-level properties: mutual exclusion, meal conservation, starvation,
//! structural deadlock, and round-robin fairness.
//!
//! Every multi-tick run goes through [`History::record`], which checks the
//! fork/state invariants after each tick.

use symposium_core::{AgentId, AgentState, ForkId, Strategy, TickId};
use symposium_engine::{ActionOutcome, SchedulerKind, Simulation, TableConfig};
use symposium_test_utils::{all_greedy, assert_invariants, scenario_three_round_robin, table, History};

const SCHEDULERS: [SchedulerKind; 3] = [
    SchedulerKind::RoundRobin,
    SchedulerKind::Random,
    SchedulerKind::PrioritizeStarving,
];

// ── Mutual exclusion and conservation ────────────────────────

#[test]
fn invariants_hold_for_mixed_strategies_under_every_scheduler() {
    for scheduler in SCHEDULERS {
        let mut sim = Simulation::new(TableConfig {
            starvation_threshold_seconds: 50.0,
            ..table(7, scheduler, Strategy::Normal)
        })
        .unwrap();
        sim.set_strategy(AgentId(1), Strategy::Greedy).unwrap();
        sim.set_strategy(AgentId(4), Strategy::Greedy).unwrap();
        sim.set_strategy(AgentId(5), Strategy::Polite).unwrap();
        sim.reset_with_deadlock();
        if let Err(e) = History::record(&mut sim, 2_000) {
            panic!("{scheduler}: {e}");
        }
    }
}

#[test]
fn eaten_count_matches_observed_meals() {
    let mut sim = Simulation::new(TableConfig {
        starvation_threshold_seconds: 1_000.0,
        seed: 9,
        ..table(5, SchedulerKind::Random, Strategy::Normal)
    })
    .unwrap();
    let history = History::record(&mut sim, 1_500).unwrap();
    let snap = sim.snapshot();
    let mut total = 0;
    for (id, agent) in snap.agents() {
        assert_eq!(
            agent.eaten_count,
            history.meals_observed(id, AgentState::Thinking),
            "agent {id}"
        );
        total += agent.eaten_count;
    }
    assert!(total > 0);
    assert_eq!(sim.last_metrics().meals, total);
}

#[test]
fn eaten_count_never_decreases() {
    let mut sim = Simulation::new(table(6, SchedulerKind::PrioritizeStarving, Strategy::Greedy)).unwrap();
    let history = History::record(&mut sim, 600).unwrap();
    for pair in history.eaten.windows(2) {
        for (before, after) in pair[0].iter().zip(&pair[1]) {
            assert!(after >= before);
            assert!(after - before <= 1);
        }
    }
}

// ── Starvation ───────────────────────────────────────────────

#[test]
fn deadlocked_agents_starve_after_threshold_ticks() {
    let cases = [
        (1.0, 10.0, 10),
        (1.0, 2.5, 3),
        (0.5, 3.0, 6),
        (0.25, 1.0, 4),
        (2.0, 5.0, 3),
        (0.1, 1.0, 10),
        (0.1, 10.0, 100),
        (0.3, 6.0, 20),
        (0.01, 2.0, 200),
        (0.07, 1.0, 15),
    ];
    for (tick_seconds, threshold, expected) in cases {
        for scheduler in SCHEDULERS {
            let mut sim = Simulation::new(TableConfig {
                tick_seconds,
                starvation_threshold_seconds: threshold,
                ..table(4, scheduler, Strategy::Greedy)
            })
            .unwrap();
            sim.reset_with_deadlock();
            assert_eq!(sim.config().ticks_to_starve(), expected);

            let reports = sim.run(expected as usize + 20);
            for report in &reports[..expected as usize - 1] {
                assert!(report.starved.is_empty(), "{scheduler} dt={tick_seconds}");
            }
            let deaths = &reports[expected as usize - 1];
            assert_eq!(deaths.tick_id, TickId(expected));
            assert_eq!(
                deaths.starved.as_slice(),
                &[AgentId(0), AgentId(1), AgentId(2), AgentId(3)]
            );
            assert!(reports[expected as usize..].iter().all(|r| r.starved.is_empty()));
            assert!(sim.snapshot().all_dead());
            assert_eq!(sim.last_metrics().deaths, 4);
        }
    }
}

#[test]
fn starvation_is_narrated_only_when_action_is_inert() {
    let mut sim = Simulation::new(TableConfig {
        starvation_threshold_seconds: 2.5,
        ..scenario_three_round_robin()
    })
    .unwrap();
    let reports = sim.run(6);

    // Tick 3: agent 2 fails while agents 1 and 2 starve.
    assert_eq!(reports[2].starved.as_slice(), &[AgentId(1), AgentId(2)]);
    assert_eq!(
        reports[2].description(),
        "Philosopher 3 tried to eat but couldn't get both forks."
    );
    assert_eq!(
        reports[2].narrations(),
        vec![
            "Philosopher 3 tried to eat but couldn't get both forks.".to_string(),
            "Philosopher 2 has starved to death!".to_string(),
            "Philosopher 3 has starved to death!".to_string(),
        ]
    );

    // Tick 6: dead agent 2 is inert; agent 0 starves three ticks after its meal.
    assert_eq!(reports[5].outcome, ActionOutcome::Inert { agent: AgentId(2) });
    assert_eq!(reports[5].starved.as_slice(), &[AgentId(0)]);
    assert_eq!(reports[5].description(), "Philosopher 1 has starved to death!");
    assert_eq!(reports[5].to_string(), "[tick 6] Philosopher 1 has starved to death!");
}

#[test]
fn dead_agents_never_change_state() {
    let mut sim = all_greedy(5, SchedulerKind::Random);
    let history = History::record(&mut sim, 500).unwrap();
    for agent in 0..5 {
        let first_dead = history
            .states
            .iter()
            .position(|row| row[agent] == AgentState::Dead)
            .expect("every deadlocked agent starves");
        assert!(history.states[first_dead..]
            .iter()
            .all(|row| row[agent] == AgentState::Dead));
    }
}

// ── Deadlock reproduction ────────────────────────────────────

#[test]
fn all_greedy_deadlock_never_eats() {
    for n in [3, 4, 5, 8] {
        for scheduler in SCHEDULERS {
            let mut sim = all_greedy(n, scheduler);
            assert_invariants(&sim.snapshot());
            let history = History::record(&mut sim, n * 100).unwrap();
            assert!(!history.anyone_ate(), "n={n} {scheduler}");
            assert!(history
                .states
                .iter()
                .flatten()
                .all(|s| matches!(s, AgentState::Thinking | AgentState::Dead)));
        }
    }
}

#[test]
fn four_greedy_deadlock_scenario() {
    let mut sim = all_greedy(4, SchedulerKind::RoundRobin);
    let snap = sim.snapshot();
    for k in 0..4 {
        assert_eq!(snap.fork_owner(ForkId(k)), Ok(Some(AgentId(k))));
    }
    assert_eq!(snap.count_in(AgentState::Thinking), 4);

    let report = sim.tick();
    assert_eq!(
        report.outcome,
        ActionOutcome::GreedyWaiting {
            agent: AgentId(0),
            picked_up: 0,
            holding: 1
        }
    );
    assert_eq!(
        report.description(),
        "Greedy Philosopher 1 is holding one fork and waiting for the other."
    );

    let mut previous = 1.0;
    for _ in 1..9 {
        sim.tick();
        let wait = sim.snapshot().agent(AgentId(3)).unwrap().wait_timer;
        assert!(wait > previous);
        previous = wait;
    }
    sim.tick();
    let snap = sim.snapshot();
    assert!(snap.all_dead());
    assert!(snap.forks().all(|(_, owner)| owner.is_none()));
}

// ── Scheduling ───────────────────────────────────────────────

#[test]
fn round_robin_selects_each_agent_k_times_in_order() {
    for n in [3, 5, 9] {
        let k = 7;
        let mut sim = Simulation::new(TableConfig {
            starvation_threshold_seconds: 1_000.0,
            ..table(n, SchedulerKind::RoundRobin, Strategy::Normal)
        })
        .unwrap();
        let history = History::record(&mut sim, k * n).unwrap();
        let picks = history.selections();
        for (i, pick) in picks.iter().enumerate() {
            assert_eq!(pick.index(), i % n);
        }
        for agent in 0..n {
            assert_eq!(picks.iter().filter(|p| p.index() == agent).count(), k);
        }
    }
}

#[test]
fn three_agent_round_robin_scenario() {
    let mut sim = Simulation::new(scenario_three_round_robin()).unwrap();

    let t1 = sim.tick();
    assert_eq!(t1.selected, AgentId(0));
    assert_eq!(t1.outcome, ActionOutcome::StartedEating { agent: AgentId(0) });
    {
        let snap = sim.snapshot();
        assert_eq!(snap.agent(AgentId(0)).unwrap().eaten_count, 1);
        assert_eq!(snap.fork_owner(ForkId(0)), Ok(Some(AgentId(0))));
        assert_eq!(snap.fork_owner(ForkId(2)), Ok(Some(AgentId(0))));
    }

    let t2 = sim.tick();
    assert_eq!(t2.outcome, ActionOutcome::FailedToEat { agent: AgentId(1) });
    assert_eq!(sim.snapshot().agent(AgentId(1)).unwrap().failed_attempt_count, 1);

    let t3 = sim.tick();
    assert_eq!(t3.outcome, ActionOutcome::FailedToEat { agent: AgentId(2) });
    assert_eq!(
        sim.snapshot().agent(AgentId(0)).unwrap().state,
        AgentState::Eating
    );

    let t4 = sim.tick();
    assert_eq!(t4.outcome, ActionOutcome::FinishedEating { agent: AgentId(0) });
    assert_eq!(
        t4.description(),
        "Philosopher 1 finished eating and is now thinking."
    );
}

#[test]
fn prioritize_starving_only_selects_thinkers_while_any_remain() {
    let mut sim = Simulation::new(table(5, SchedulerKind::PrioritizeStarving, Strategy::Normal)).unwrap();
    let history = History::record(&mut sim, 200).unwrap();
    let mut before = vec![AgentState::Thinking; 5];
    for (report, after) in history.reports.iter().zip(&history.states) {
        if before.contains(&AgentState::Thinking) {
            assert_eq!(before[report.selected.index()], AgentState::Thinking);
        } else {
            assert_eq!(report.selected, AgentId(0));
        }
        before = after.clone();
    }
}
