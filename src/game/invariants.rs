//! Game invariants - sanity checks that detect bugs.
//!
//! None of these can be violated through the public turn engine API. If one
//! triggers, the engine is broken (or a test poked at the state directly).

use crate::game::{DecisionKind, GameState, NUM_PLAYERS};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let len = state.board.len();

    // Positions stay on the board
    for player in &state.players {
        if player.position >= len {
            violations.push(InvariantViolation {
                message: format!(
                    "Player {} at position {} outside board of {len}",
                    player.id, player.position
                ),
            });
        }
    }

    // Player ids are distinct
    if state.players[0].id == state.players[1].id {
        violations.push(InvariantViolation {
            message: format!("Both players share id {}", state.players[0].id),
        });
    }

    if state.current_index() >= NUM_PLAYERS {
        violations.push(InvariantViolation {
            message: format!("Turn pointer {} out of range", state.current_index()),
        });
    }

    // Only assets carry owners, and only real players own them
    for (index, tile) in state.board.iter() {
        let Some(owner) = tile.owner else {
            continue;
        };
        if !tile.is_asset() {
            violations.push(InvariantViolation {
                message: format!("Non-asset tile {index} ({}) has owner {owner}", tile.name),
            });
        }
        if state.player(owner).is_none() {
            violations.push(InvariantViolation {
                message: format!("Tile {index} ({}) owned by unknown player {owner}", tile.name),
            });
        }
    }

    // A pending purchase must point at an unowned asset under the current player
    if let Some(decision) = state.pending_decision() {
        if decision.options.is_empty() {
            violations.push(InvariantViolation {
                message: "Pending decision has no options".to_string(),
            });
        }
        if let DecisionKind::Purchase { tile } = decision.kind {
            let position = state.current_player().position;
            if tile != position {
                violations.push(InvariantViolation {
                    message: format!(
                        "Purchase offered for tile {tile} but player stands on {position}"
                    ),
                });
            }
            match state.board.get(tile) {
                Some(t) if t.is_asset() && t.owner.is_none() => {}
                _ => violations.push(InvariantViolation {
                    message: format!("Purchase offered for tile {tile} which is not for sale"),
                }),
            }
        }
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
