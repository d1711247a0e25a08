//! Turn-based simulation engine for the Symposium dining philosophers model.
//!
//! Provides [`Simulation`], a host-driven table of agents contending for
//! forks in a ring. Each [`tick()`](Simulation::tick) selects one agent via
//! the configured scheduler, applies its fork rule, then advances every
//! agent's wait timer and applies starvation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod event;
pub mod lockstep;
pub mod metrics;
pub mod scheduler;
pub mod snapshot;
pub mod tick;

pub use config::{ConfigError, TableConfig};
pub use event::{ActionOutcome, TickReport, DEADLOCK_RESET_NARRATION, RESET_NARRATION};
pub use lockstep::Simulation;
pub use metrics::StepMetrics;
pub use scheduler::{Scheduler, SchedulerKind};
pub use snapshot::TableSnapshot;
pub use tick::TickEngine;
