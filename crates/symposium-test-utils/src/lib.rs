//! Test fixtures and invariant checks for Symposium development.
//!
//! Provides canonical [`TableConfig`](symposium_engine::TableConfig)
//! fixtures, a table-wide invariant checker usable from plain tests and
//! `proptest` bodies, and a [`History`] recorder for multi-tick properties.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod history;
pub mod invariants;

pub use fixtures::{all_greedy, scenario_three_round_robin, table};
pub use history::History;
pub use invariants::{assert_invariants, check_invariants};
