//! Serializable snapshots for external front ends.

use serde::Serialize;

use crate::game::{
    Board, DecisionKind, GameState, PendingDecision, Player, PlayerId, Tile, TileKind,
};

/// Everything a front end needs to redraw after a command.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Completed turns.
    pub turn: u32,
    /// Id of the player to act.
    pub current_player: PlayerId,
    /// Most recent die value.
    pub last_roll: Option<u8>,
    /// Whether the dice may be rolled.
    pub can_roll: bool,
    /// Both players.
    pub players: Vec<PlayerSnapshot>,
    /// Decision blocking the turn.
    pub pending: Option<DecisionSnapshot>,
    /// Log lines, newest first.
    pub log: Vec<String>,
}

/// JSON-serializable player.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSnapshot {
    /// Player id (1 or 2).
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Balance.
    pub money: i64,
    /// Board index.
    pub position: usize,
    /// Indices of owned assets.
    pub assets: Vec<usize>,
}

/// JSON-serializable decision prompt.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionSnapshot {
    /// `purchase` or `chance`.
    pub kind: &'static str,
    /// Asset on offer, for purchases.
    pub tile: Option<usize>,
    /// Prompt title.
    pub title: String,
    /// Prompt body.
    pub text: String,
    /// Option labels in order; submit the 1-based position to choose.
    pub options: Vec<&'static str>,
}

/// JSON-serializable tile.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TileSnapshot {
    /// Board index.
    pub index: usize,
    /// Display name.
    pub name: &'static str,
    /// Tile kind label.
    pub kind: &'static str,
    /// Purchase price (assets).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<i32>,
    /// Rent (assets).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rent: Option<i32>,
    /// Amount collected or paid (income and expense tiles).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i32>,
    /// Owner id (assets).
    pub owner: Option<PlayerId>,
}

impl Snapshot {
    /// Capture the game, keeping at most `log_lines` log entries.
    #[must_use]
    pub fn capture(state: &GameState, log_lines: usize) -> Self {
        Self {
            turn: state.turn(),
            current_player: state.current_player().id,
            last_roll: state.last_roll(),
            can_roll: state.can_roll(),
            players: state
                .players
                .iter()
                .map(|p| PlayerSnapshot::capture(p, &state.board))
                .collect(),
            pending: state.pending_decision().map(DecisionSnapshot::from),
            log: state
                .log()
                .iter()
                .take(log_lines)
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl PlayerSnapshot {
    /// Capture a player and the assets they own.
    #[must_use]
    pub fn capture(player: &Player, board: &Board) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            money: player.money,
            position: player.position,
            assets: board.owned_by(player.id).map(|(index, _)| index).collect(),
        }
    }
}

impl From<&PendingDecision> for DecisionSnapshot {
    fn from(decision: &PendingDecision) -> Self {
        let (kind, tile) = match decision.kind {
            DecisionKind::Purchase { tile } => ("purchase", Some(tile)),
            DecisionKind::Chance { .. } => ("chance", None),
        };
        Self {
            kind,
            tile,
            title: decision.title.clone(),
            text: decision.text.clone(),
            options: decision.options.iter().map(|o| o.label).collect(),
        }
    }
}

impl TileSnapshot {
    /// Capture one tile.
    #[must_use]
    pub fn capture(index: usize, tile: &Tile) -> Self {
        let (cost, rent, amount) = match tile.kind {
            TileKind::Asset { cost, rent } => (Some(cost), Some(rent), None),
            TileKind::Income { amount } | TileKind::Expense { amount } => (None, None, Some(amount)),
            _ => (None, None, None),
        };
        Self {
            index,
            name: tile.name,
            kind: tile.kind.label(),
            cost,
            rent,
            amount,
            owner: tile.owner,
        }
    }

    /// Capture the whole board.
    #[must_use]
    pub fn board(board: &Board) -> Vec<Self> {
        board.iter().map(|(index, tile)| Self::capture(index, tile)).collect()
    }
}
