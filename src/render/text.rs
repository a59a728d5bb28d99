//! Plain text views.
//!
//! Output is meant for terminals and log files, so it avoids ANSI colors.

#![allow(clippy::format_push_string)]

use crate::game::{Board, GameState, PendingDecision, TileKind, PASS_START_BONUS};

/// Render balances, positions, turn and any pending decision.
///
/// Output format:
/// ```text
/// === TURN 3 === Player 2 to move (last roll: 4)
///
///   Player 1    $1350  on  3 Real Estate       owns 1 asset ($150)
/// > Player 2    $1500  on  4 Pay Day           owns 0 assets ($0)
/// ```
#[must_use]
pub fn render_status(state: &GameState) -> String {
    let mut output = String::new();
    let current = state.current_player();

    output.push_str(&format!("=== TURN {} === {} to move", state.turn() + 1, current.name));
    if let Some(roll) = state.last_roll() {
        output.push_str(&format!(" (last roll: {roll})"));
    }
    output.push_str("\n\n");

    for (index, player) in state.players.iter().enumerate() {
        let marker = if index == state.current_index() { '>' } else { ' ' };
        let tile = state.board.get(player.position).map_or("?", |t| t.name);
        let owned = state.board.owned_by(player.id).count();
        let plural = if owned == 1 { "" } else { "s" };
        output.push_str(&format!(
            "{marker} {:<10} ${:>5}  on {:>2} {:<17} owns {owned} asset{plural} (${})\n",
            player.name,
            player.money,
            player.position,
            tile,
            state.board.holdings_value(player.id),
        ));
    }

    if let Some(decision) = state.pending_decision() {
        output.push('\n');
        output.push_str(&render_decision(decision));
    }

    output
}

/// Render a decision prompt with 1-based option numbers.
#[must_use]
pub fn render_decision(decision: &PendingDecision) -> String {
    let mut output = format!("[{}]\n{}\n", decision.title, decision.text);
    for (i, option) in decision.options.iter().enumerate() {
        output.push_str(&format!("  {}) {}\n", i + 1, option.label));
    }
    output
}

/// Render every tile with its effect and owner.
#[must_use]
pub fn render_board(board: &Board) -> String {
    let mut output = String::new();
    for (index, tile) in board.iter() {
        let detail = match tile.kind {
            TileKind::Asset { cost, rent } => format!("cost ${cost}, rent ${rent}"),
            TileKind::Income { amount } => format!("collect ${amount}"),
            TileKind::Expense { amount } => format!("pay ${amount}"),
            TileKind::Start => format!("collect ${PASS_START_BONUS} when passing"),
            TileKind::Chance => "draw a card".to_string(),
            TileKind::Empty | TileKind::Penalty => String::new(),
        };
        output.push_str(&format!("{index:>2} {:<17} {:<8} {detail}", tile.name, tile.kind.label()));
        if let Some(owner) = tile.owner {
            output.push_str(&format!(" [owner: player {owner}]"));
        }
        output.push('\n');
    }
    output
}

/// Render the `lines` most recent log entries, newest first.
#[must_use]
pub fn render_log(state: &GameState, lines: usize) -> String {
    state
        .log()
        .iter()
        .take(lines)
        .map(|event| format!("- {event}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ScriptedRandom;

    #[test]
    fn test_status_marks_current_player() {
        let state = GameState::default();
        let status = render_status(&state);
        assert!(status.starts_with("=== TURN 1 === Player 1 to move\n"));
        assert!(status.contains("> Player 1"));
        assert!(status.contains("  Player 2"));
        assert!(status.contains("$ 1500"));
    }

    #[test]
    fn test_status_shows_pending_decision() {
        let mut state = GameState::default();
        state.take_turn(3, &mut ScriptedRandom::default()).unwrap();
        let status = render_status(&state);
        assert!(status.contains("(last roll: 3)"));
        assert!(status.contains("[Buy Real Estate?]"));
        assert!(status.contains("  1) Buy\n  2) Pass\n"));
    }

    #[test]
    fn test_board_lists_every_tile() {
        let mut board = Board::standard();
        if let Some(tile) = board.get_mut(23) {
            tile.owner = Some(2);
        }
        let text = render_board(&board);
        assert_eq!(text.lines().count(), board.len());
        assert!(text.contains("Real Estate"));
        assert!(text.contains("cost $150, rent $15"));
        assert!(text.lines().last().unwrap().ends_with("[owner: player 2]"));
    }

    #[test]
    fn test_log_newest_first() {
        let mut state = GameState::default();
        state.take_turn(4, &mut ScriptedRandom::default()).unwrap();
        let log = render_log(&state, 2);
        assert_eq!(log, "- Player 1 collected $200!\n- Player 1 landed on Pay Day.\n");
    }
}
