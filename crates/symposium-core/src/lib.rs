//! Core types for the Symposium dining philosophers simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Symposium workspace:
//! typed IDs, the seating ring, agent and fork records, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod error;
pub mod fork;
pub mod id;
pub mod ring;

pub use agent::{Agent, AgentState, Strategy, StrategyCycle};
pub use error::{RingError, TableError};
pub use fork::Fork;
pub use id::{AgentId, ForkId, TickId};
pub use ring::Ring;
