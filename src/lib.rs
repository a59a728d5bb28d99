// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Fun Finance: a two-player board game engine.
//!
//! This crate provides the rules and turn engine for a small money game
//! played on a ring of 24 tiles:
//! - Dice movement with a bonus for passing START
//! - Assets to buy and collect rent on
//! - Income, expense and chance tiles
//! - Decisions returned as values, so any front end can drive the game
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Front ends (TUI, stdin protocol)  │
//! ├─────────────────────────────────────┤
//! │   Session (commands) / Render       │
//! ├─────────────────────────────────────┤
//! │   Game (board, turn engine, rules)  │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use fun_finance::{GameConfig, GameState, ScriptedRandom, TurnStatus};
//!
//! let mut game = GameState::new(&GameConfig::default());
//! let mut dice = ScriptedRandom::rolls(vec![3]);
//!
//! // Player 1 lands on an unowned asset and is asked to buy it.
//! let outcome = game.play_turn(&mut dice)?;
//! assert_eq!(outcome.status, TurnStatus::AwaitingDecision);
//!
//! // Option 0 is "Buy"; the turn then passes to player 2.
//! game.choose(0)?;
//! assert_eq!(game.current_player().id, 2);
//! # Ok::<(), fun_finance::GameError>(())
//! ```

pub mod error;
pub mod game;
pub mod render;
pub mod session;

pub use error::{GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{
    Board, Choice, GameConfig, GameState, PendingDecision, Player, PlayerId, RandomSource,
    ScriptedRandom, SeededRandom, Tile, TileKind, TurnOutcome, TurnStatus,
};
pub use session::{Command, Response, Session, SessionError};
