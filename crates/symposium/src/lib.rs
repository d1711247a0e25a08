//! Symposium: a discrete-time dining philosophers simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Symposium sub-crates. For most users, adding `symposium` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use symposium::prelude::*;
//!
//! let mut sim = Simulation::new(TableConfig {
//!     agent_count: 3,
//!     ..TableConfig::default()
//! })
//! .unwrap();
//!
//! let report = sim.tick();
//! assert_eq!(report.description(), "Philosopher 1 started eating.");
//!
//! let report = sim.tick();
//! assert_eq!(
//!     report.description(),
//!     "Philosopher 2 tried to eat but couldn't get both forks."
//! );
//!
//! // Every philosopher greedy, each holding its left fork: nobody eats again.
//! for i in 0..3 {
//!     sim.set_strategy(AgentId(i), Strategy::Greedy).unwrap();
//! }
//! sim.reset_with_deadlock();
//! sim.run(30);
//! assert!(sim.snapshot().all_dead());
//! assert_eq!(sim.last_metrics().meals, 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `symposium-core` | IDs, ring topology, agents, forks, errors |
//! | [`engine`] | `symposium-engine` | Configuration, schedulers, tick engine, snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`symposium-core`).
///
/// Contains the [`types::Ring`] topology, [`types::Agent`] and
/// [`types::Fork`] records, and the [`types::TableError`] type.
pub use symposium_core as types;

/// Simulation engine (`symposium-engine`).
///
/// [`engine::Simulation`] for host-driven stepping, [`engine::TickEngine`]
/// for callers that manage configuration themselves.
pub use symposium_engine as engine;

/// Common imports for typical Symposium usage.
///
/// ```rust
/// use symposium::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use symposium_core::{
        Agent, AgentId, AgentState, ForkId, Ring, Strategy, StrategyCycle, TickId,
    };

    // Errors
    pub use symposium_core::{RingError, TableError};
    pub use symposium_engine::ConfigError;

    // Engine
    pub use symposium_engine::{
        ActionOutcome, SchedulerKind, Simulation, StepMetrics, TableConfig, TableSnapshot,
        TickReport,
    };
}
