//! Table invariants that must hold after every tick.

use symposium_core::{AgentState, Strategy};
use symposium_engine::TableSnapshot;

/// Check every table invariant, describing the first violation found.
///
/// - A held fork belongs to one of the two agents adjacent to it.
/// - A fork owner is eating, or thinking while holding partial forks.
/// - An eating agent holds both of its forks.
/// - A dead agent holds no forks.
/// - A thinking agent holds partial forks only if it is greedy, or became
///   non-greedy after picking them up (`allow_stale_partial`).
pub fn check_invariants(snap: &TableSnapshot<'_>, allow_stale_partial: bool) -> Result<(), String> {
    let ring = snap.ring();
    for (fork, owner) in snap.forks() {
        let Some(owner) = owner else { continue };
        if !ring.forks_of(owner).contains(&fork) {
            return Err(format!("fork {fork} held by non-adjacent agent {owner}"));
        }
        let agent = snap.agent(owner).map_err(|e| e.to_string())?;
        match agent.state {
            AgentState::Eating => {}
            AgentState::Dead => return Err(format!("fork {fork} held by dead agent {owner}")),
            AgentState::Thinking => {
                if agent.strategy != Strategy::Greedy && !allow_stale_partial {
                    return Err(format!(
                        "fork {fork} held by thinking {} agent {owner}",
                        agent.strategy
                    ));
                }
            }
        }
    }
    for (id, agent) in snap.agents() {
        let held = snap.forks_held_by(id).map_err(|e| e.to_string())?;
        match agent.state {
            AgentState::Eating if held.len() != 2 => {
                return Err(format!("eating agent {id} holds {} forks", held.len()));
            }
            AgentState::Eating if agent.wait_timer != 0.0 => {
                return Err(format!("eating agent {id} has wait {}", agent.wait_timer));
            }
            AgentState::Dead if !held.is_empty() => {
                return Err(format!("dead agent {id} holds {} forks", held.len()));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Panic on the first invariant violation (strict: no stale partials).
pub fn assert_invariants(snap: &TableSnapshot<'_>) {
    if let Err(msg) = check_invariants(snap, false) {
        panic!("invariant violated at tick {}: {msg}", snap.tick_id());
    }
}
