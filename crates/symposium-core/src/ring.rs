//! Seating ring: the fixed agent/fork topology (always-wrap).

use crate::error::{RingError, TableError};
use crate::id::{AgentId, ForkId};

/// A ring of `N` agents with `N` forks between them.
///
/// Agent `i`'s left fork is fork `i`; its right fork is fork
/// `(i - 1 + N) mod N`. Every fork is therefore contended by exactly two
/// ring-adjacent agents, which is what allows the symmetric deadlock where
/// every agent holds one fork and waits on its neighbour for the other.
///
/// # Examples
///
/// ```
/// use symposium_core::{AgentId, ForkId, Ring};
///
/// let ring = Ring::new(5).unwrap();
/// assert_eq!(ring.seats(), 5);
///
/// // Agent 0's right fork wraps to the last fork.
/// assert_eq!(ring.left_fork(AgentId(0)), ForkId(0));
/// assert_eq!(ring.right_fork(AgentId(0)), ForkId(4));
///
/// // Fork 4 is shared by agents 4 and 0.
/// assert_eq!(ring.seats_at(ForkId(4)), [AgentId(4), AgentId(0)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ring {
    seats: u32,
}

impl Ring {
    /// Smallest ring that exhibits the deadlock topology.
    pub const MIN_SEATS: usize = 3;

    /// Largest ring accepted (2^20 seats). Storage for every agent and fork
    /// is allocated at construction.
    pub const MAX_SEATS: usize = 1 << 20;

    /// Create a ring seating `seats` agents.
    ///
    /// Returns `Err(RingError::TooFewSeats)` if `seats < 3`, or
    /// `Err(RingError::TooManySeats)` if `seats > MAX_SEATS`.
    pub fn new(seats: usize) -> Result<Self, RingError> {
        if seats < Self::MIN_SEATS {
            return Err(RingError::TooFewSeats { requested: seats });
        }
        if seats > Self::MAX_SEATS {
            return Err(RingError::TooManySeats { requested: seats });
        }
        Ok(Self {
            seats: seats as u32,
        })
    }

    /// Number of agents (and forks).
    pub fn seats(&self) -> usize {
        self.seats as usize
    }

    /// The fork on agent `agent`'s left: fork `i`.
    pub fn left_fork(&self, agent: AgentId) -> ForkId {
        ForkId(agent.0 % self.seats)
    }

    /// The fork on agent `agent`'s right: fork `(i - 1 + N) mod N`.
    pub fn right_fork(&self, agent: AgentId) -> ForkId {
        let i = agent.0 % self.seats;
        ForkId(if i == 0 { self.seats - 1 } else { i - 1 })
    }

    /// Both forks an agent needs to eat, `[left, right]`.
    pub fn forks_of(&self, agent: AgentId) -> [ForkId; 2] {
        [self.left_fork(agent), self.right_fork(agent)]
    }

    /// The two agents that contend for `fork`: `[k, (k + 1) mod N]`.
    ///
    /// The first is the agent whose left fork this is, the second the agent
    /// whose right fork this is.
    pub fn seats_at(&self, fork: ForkId) -> [AgentId; 2] {
        let k = fork.0 % self.seats;
        [AgentId(k), AgentId((k + 1) % self.seats)]
    }

    /// Ring neighbours of `agent`: `[(i - 1 + N) mod N, (i + 1) mod N]`.
    pub fn neighbours(&self, agent: AgentId) -> [AgentId; 2] {
        let i = agent.0 % self.seats;
        let prev = if i == 0 { self.seats - 1 } else { i - 1 };
        [AgentId(prev), AgentId((i + 1) % self.seats)]
    }

    /// All agent ids in canonical (ascending) order.
    pub fn agents(&self) -> impl Iterator<Item = AgentId> {
        (0..self.seats).map(AgentId)
    }

    /// All fork ids in canonical (ascending) order.
    pub fn forks(&self) -> impl Iterator<Item = ForkId> {
        (0..self.seats).map(ForkId)
    }

    /// Check that `agent` is seated at this table.
    pub fn check_agent(&self, agent: AgentId) -> Result<AgentId, TableError> {
        if agent.0 < self.seats {
            Ok(agent)
        } else {
            Err(TableError::AgentOutOfRange {
                agent,
                agent_count: self.seats(),
            })
        }
    }

    /// Check that `fork` exists at this table.
    pub fn check_fork(&self, fork: ForkId) -> Result<ForkId, TableError> {
        if fork.0 < self.seats {
            Ok(fork)
        } else {
            Err(TableError::ForkOutOfRange {
                fork,
                fork_count: self.seats(),
            })
        }
    }
}
