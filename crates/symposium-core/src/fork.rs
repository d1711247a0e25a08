//! Fork ownership.
//!
//! A fork has at most one owner by construction: the owner is a single
//! `Option<AgentId>`, and the only way to change it is through
//! [`Fork::acquire`] and the release methods. Acquiring a fork held by a
//! different agent is an engine defect and panics.

use crate::id::AgentId;

/// A binary (owned / unowned) resource between two ring-adjacent agents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fork {
    owner: Option<AgentId>,
}

impl Fork {
    /// An unowned fork.
    pub fn new() -> Self {
        Self { owner: None }
    }

    /// The agent currently holding this fork, if any.
    pub fn owner(&self) -> Option<AgentId> {
        self.owner
    }

    /// Whether any agent holds this fork.
    pub fn is_held(&self) -> bool {
        self.owner.is_some()
    }

    /// Whether `agent` holds this fork.
    pub fn is_held_by(&self, agent: AgentId) -> bool {
        self.owner == Some(agent)
    }

    /// Give this fork to `agent`.
    ///
    /// Re-acquiring a fork the agent already holds is a no-op.
    ///
    /// # Panics
    ///
    /// Panics if another agent holds the fork. Callers check availability
    /// first; reaching this means two agents would own one fork.
    pub fn acquire(&mut self, agent: AgentId) {
        assert!(
            self.owner.is_none() || self.owner == Some(agent),
            "fork already held by agent {:?}, cannot hand to agent {agent}",
            self.owner,
        );
        self.owner = Some(agent);
    }

    /// Take the fork if nobody holds it. Returns `true` if it was taken.
    pub fn try_acquire(&mut self, agent: AgentId) -> bool {
        if self.owner.is_none() {
            self.owner = Some(agent);
            true
        } else {
            false
        }
    }

    /// Release the fork only if `agent` holds it. Returns `true` if released.
    ///
    /// Idempotent: releasing a fork held by someone else, or by nobody,
    /// changes nothing.
    pub fn release_if_held_by(&mut self, agent: AgentId) -> bool {
        if self.owner == Some(agent) {
            self.owner = None;
            true
        } else {
            false
        }
    }

    /// Release the fork regardless of owner.
    pub fn release(&mut self) {
        self.owner = None;
    }
}
