//! Game layer for Fun Finance.
//!
//! Implements the rules of the board game:
//! - A fixed ring of 24 tiles with assets, income, expenses and chance
//! - Two players with balances and positions
//! - Tile effects (purchase, rent, bank payments, chance cards)
//! - The turn engine, which stops on decisions until they are answered

mod board;
mod chance;
mod decision;
mod effects;
mod events;
mod invariants;
mod player;
mod random;
mod state;

pub use board::{Board, Tile, TileKind, BOARD_SIZE};
pub use chance::{draw_card, ChanceCard, CHANCE_CARDS};
pub use decision::{Choice, DecisionKind, DecisionOption, PendingDecision};
pub use effects::{buy_asset, pay_rent, resolve_tile};
pub use events::{EventLog, GameEvent};
pub use invariants::{assert_invariants, check_invariants, InvariantViolation};
pub use player::{Player, PlayerId, NUM_PLAYERS, STARTING_MONEY};
pub use random::{RandomSource, ScriptedRandom, SeededRandom, DIE_FACES};
pub use state::{
    DecisionOutcome, GameConfig, GameState, TurnOutcome, TurnStatus, PASS_START_BONUS,
};
