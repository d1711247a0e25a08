//! Error types for table construction and indexed access.

use std::error::Error;
use std::fmt;

use crate::id::{AgentId, ForkId};

/// Errors arising from seating-ring construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RingError {
    /// Fewer than [`Ring::MIN_SEATS`](crate::Ring::MIN_SEATS) agents.
    ///
    /// Two agents sharing two forks degenerates: each fork is both agents'
    /// left and right, so the symmetric-deadlock topology cannot form.
    TooFewSeats {
        /// The requested agent count.
        requested: usize,
    },
    /// More than [`Ring::MAX_SEATS`](crate::Ring::MAX_SEATS) agents.
    TooManySeats {
        /// The requested agent count.
        requested: usize,
    },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewSeats { requested } => {
                write!(f, "agent count {requested} is below minimum of 3")
            }
            Self::TooManySeats { requested } => {
                write!(
                    f,
                    "agent count {requested} exceeds maximum of {}",
                    crate::Ring::MAX_SEATS
                )
            }
        }
    }
}

impl Error for RingError {}

/// Errors from indexed access into a configured table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The agent index is not seated at this table.
    AgentOutOfRange {
        /// The offending agent.
        agent: AgentId,
        /// Number of agents at the table.
        agent_count: usize,
    },
    /// The fork index does not exist at this table.
    ForkOutOfRange {
        /// The offending fork.
        fork: ForkId,
        /// Number of forks at the table.
        fork_count: usize,
    },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AgentOutOfRange { agent, agent_count } => {
                write!(f, "agent {agent} out of range for {agent_count} agents")
            }
            Self::ForkOutOfRange { fork, fork_count } => {
                write!(f, "fork {fork} out of range for {fork_count} forks")
            }
        }
    }
}

impl Error for TableError {}
