//! Strongly-typed identifiers for agents, forks, and ticks.

use std::fmt;

/// Identifies an agent (a seat at the table).
///
/// Agents are numbered `0..N` in ring order at configuration time and the
/// numbering never changes until the table is reconfigured. Human-readable
/// output numbers agents from 1; see [`AgentId::number`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u32);

impl AgentId {
    /// Zero-based position in per-agent storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// One-based seat number used in narration.
    pub fn number(self) -> u64 {
        u64::from(self.0) + 1
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a fork.
///
/// Fork `k` sits between agent `k` and agent `k + 1` (mod N): it is the
/// left fork of agent `k` and the right fork of agent `k + 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForkId(pub u32);

impl ForkId {
    /// Zero-based position in per-fork storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ForkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ForkId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step. Zero after
/// construction or reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
