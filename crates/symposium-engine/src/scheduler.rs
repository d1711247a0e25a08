//! Agent selection: which single agent acts on a given tick.
//!
//! Respects the determinism contract: the random policy draws from a
//! ChaCha8 RNG seeded from the table seed, so identical seeds and call
//! sequences select identical agents.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use symposium_core::{Agent, AgentId, AgentState, Ring};

/// The rule selecting which agent acts on a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SchedulerKind {
    /// `(cursor + 1) mod N`, starting from agent 0.
    #[default]
    RoundRobin,
    /// Uniform over `[0, N)`. Does not move the round-robin cursor.
    Random,
    /// The thinking agent with the largest wait timer (lowest index on
    /// ties); agent 0 if nobody is thinking.
    PrioritizeStarving,
}

impl fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::RoundRobin => "round-robin",
            Self::Random => "random",
            Self::PrioritizeStarving => "prioritize-starving",
        };
        f.write_str(s)
    }
}

/// Selection state: the active policy, round-robin cursor, and RNG.
#[derive(Clone, Debug)]
pub struct Scheduler {
    kind: SchedulerKind,
    cursor: Option<AgentId>,
    rng: ChaCha8Rng,
}

impl Scheduler {
    /// A scheduler with no agent selected yet.
    pub fn new(kind: SchedulerKind, seed: u64) -> Self {
        Self {
            kind,
            cursor: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The active policy.
    pub fn kind(&self) -> SchedulerKind {
        self.kind
    }

    /// Switch policy without touching the cursor or RNG stream.
    pub fn set_kind(&mut self, kind: SchedulerKind) {
        self.kind = kind;
    }

    /// The last agent chosen by round-robin, or `None` before the first.
    pub fn cursor(&self) -> Option<AgentId> {
        self.cursor
    }

    /// Clear the cursor and restart the RNG stream from `seed`.
    pub fn reset(&mut self, seed: u64) {
        self.cursor = None;
        self.reseed(seed);
    }

    /// Restart the RNG stream from `seed`, keeping the cursor.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Choose exactly one agent to act this tick.
    ///
    /// `agents` is indexed by [`AgentId::index`] and has `ring.seats()`
    /// entries.
    pub fn select(&mut self, ring: &Ring, agents: &[Agent]) -> AgentId {
        debug_assert_eq!(agents.len(), ring.seats());
        match self.kind {
            SchedulerKind::RoundRobin => {
                let next = match self.cursor {
                    None => AgentId(0),
                    Some(c) => AgentId(((u64::from(c.0) + 1) % ring.seats() as u64) as u32),
                };
                self.cursor = Some(next);
                next
            }
            SchedulerKind::Random => AgentId(self.rng.random_range(0..ring.seats() as u32)),
            SchedulerKind::PrioritizeStarving => most_starved(agents).unwrap_or(AgentId(0)),
        }
    }
}

/// The thinking agent with the largest wait timer, lowest index on ties.
fn most_starved(agents: &[Agent]) -> Option<AgentId> {
    let mut best: Option<(usize, f64)> = None;
    for (i, agent) in agents.iter().enumerate() {
        if agent.state != AgentState::Thinking {
            continue;
        }
        match best {
            Some((_, timer)) if agent.wait_timer <= timer => {}
            _ => best = Some((i, agent.wait_timer)),
        }
    }
    best.map(|(i, _)| AgentId(i as u32))
}
