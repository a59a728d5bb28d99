//! Error types for the turn engine.

use std::fmt;

use crate::game::PlayerId;

/// Errors raised when a command cannot be applied to the game.
///
/// A failed command never changes the game state: the turn pointer, balances,
/// ownership and any pending decision are left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A position resolved outside the board. The modulo arithmetic makes this
    /// impossible, so seeing it means the engine itself is broken.
    InvalidTileIndex {
        /// The offending index.
        index: usize,
        /// Number of tiles on the board.
        len: usize,
    },
    /// A die value outside `1..=6`.
    InvalidRoll(u8),
    /// A roll was attempted while a decision is still waiting for an answer.
    DecisionPending,
    /// A choice was submitted but nothing is waiting for one.
    NoPendingDecision,
    /// The chosen option index does not exist.
    InvalidOption {
        /// Index that was submitted (0-based).
        index: usize,
        /// Number of options on offer.
        available: usize,
    },
    /// The player cannot pay for the asset.
    InsufficientFunds {
        /// Price of the asset.
        needed: i32,
        /// Current balance of the buyer.
        available: i64,
    },
    /// The asset already has an owner.
    AlreadyOwned {
        /// Board index of the asset.
        tile: usize,
        /// Current owner.
        owner: PlayerId,
    },
    /// The tile cannot be bought.
    NotAnAsset {
        /// Board index of the tile.
        tile: usize,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidTileIndex { index, len } => {
                write!(f, "tile index {index} is outside the board (0..{len})")
            }
            GameError::InvalidRoll(roll) => write!(f, "invalid roll {roll}, expected 1-6"),
            GameError::DecisionPending => write!(f, "a decision is pending"),
            GameError::NoPendingDecision => write!(f, "no decision is pending"),
            GameError::InvalidOption { index, available } => {
                write!(
                    f,
                    "option {} does not exist ({available} available)",
                    index + 1
                )
            }
            GameError::InsufficientFunds { needed, available } => {
                write!(f, "insufficient funds: need ${needed}, have ${available}")
            }
            GameError::AlreadyOwned { tile, owner } => {
                write!(f, "tile {tile} is already owned by player {owner}")
            }
            GameError::NotAnAsset { tile } => write!(f, "tile {tile} is not an asset"),
        }
    }
}

impl std::error::Error for GameError {}

/// Result type for turn engine operations.
pub type GameResult<T> = Result<T, GameError>;
