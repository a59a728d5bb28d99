//! Output formatting utilities for CLI.

#![allow(clippy::format_push_string)]

use fun_finance::game::{Choice, GameEvent, GameState, TurnStatus};
use fun_finance::render::{
    render_board, render_decision, render_log, render_status, Snapshot, TileSnapshot,
};
use fun_finance::session::{DEFAULT_LOG_LINES, KNOWN_COMMANDS};
use fun_finance::Response;
use serde::Serialize;

/// JSON-serializable command response.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(super) enum JsonResponse {
    /// A turn was taken.
    Turn {
        /// Who moved.
        player: u8,
        /// Die value.
        roll: u8,
        /// Position before the move.
        from: usize,
        /// Position after the move.
        to: usize,
        /// Whether START was passed.
        passed_start: bool,
        /// Whether a decision now blocks the turn.
        awaiting_decision: bool,
        /// Events logged by the turn, oldest first.
        events: Vec<String>,
        /// Game after the turn.
        state: Snapshot,
    },
    /// A decision was answered.
    Decision {
        /// Who decided.
        player: u8,
        /// `buy`, `pass` or `ok`.
        choice: &'static str,
        /// Asset bought, if any.
        bought: Option<usize>,
        /// Events logged by the decision, oldest first.
        events: Vec<String>,
        /// Game after the decision.
        state: Snapshot,
    },
    /// Current game status.
    Status {
        /// Game snapshot.
        state: Snapshot,
    },
    /// The board.
    Board {
        /// Every tile in order.
        tiles: Vec<TileSnapshot>,
    },
    /// Recent log lines, newest first.
    Log {
        /// Log lines.
        lines: Vec<String>,
    },
    /// The command list.
    Help {
        /// Commands in display order.
        commands: Vec<JsonCommand>,
    },
    /// The session stopped.
    Quit,
}

/// JSON-serializable command description.
#[derive(Debug, Clone, Copy, Serialize)]
pub(super) struct JsonCommand {
    /// Command syntax.
    usage: &'static str,
    /// What it does.
    description: &'static str,
}

/// JSON-serializable error.
#[derive(Debug, Serialize)]
pub(super) struct JsonError {
    /// Error message.
    error: String,
}

impl JsonError {
    /// Wrap an error message.
    pub(super) fn new(error: impl ToString) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl JsonResponse {
    /// Build from a response and the game it was applied to.
    pub(super) fn from_response(response: &Response, state: &GameState) -> Self {
        match response {
            Response::Turn { outcome, events } => Self::Turn {
                player: outcome.player,
                roll: outcome.roll,
                from: outcome.from,
                to: outcome.to,
                passed_start: outcome.passed_start,
                awaiting_decision: outcome.status == TurnStatus::AwaitingDecision,
                events: event_lines(events),
                state: Snapshot::capture(state, DEFAULT_LOG_LINES),
            },
            Response::Decided { outcome, events } => Self::Decision {
                player: outcome.player,
                choice: choice_name(outcome.choice),
                bought: outcome.bought,
                events: event_lines(events),
                state: Snapshot::capture(state, DEFAULT_LOG_LINES),
            },
            Response::Status => Self::Status {
                state: Snapshot::capture(state, DEFAULT_LOG_LINES),
            },
            Response::Board => Self::Board {
                tiles: TileSnapshot::board(&state.board),
            },
            Response::Log(lines) => Self::Log {
                lines: state.log().iter().take(*lines).map(ToString::to_string).collect(),
            },
            Response::Help => Self::Help {
                commands: KNOWN_COMMANDS
                    .iter()
                    .map(|&(usage, description)| JsonCommand { usage, description })
                    .collect(),
            },
            Response::Quit => Self::Quit,
        }
    }
}

fn event_lines(events: &[GameEvent]) -> Vec<String> {
    events.iter().map(ToString::to_string).collect()
}

const fn choice_name(choice: Choice) -> &'static str {
    match choice {
        Choice::Buy => "buy",
        Choice::Pass => "pass",
        Choice::Acknowledge => "ok",
    }
}

/// Format a response as human-readable text.
pub(super) fn format_text(response: &Response, state: &GameState) -> String {
    match response {
        Response::Turn { outcome, events } => {
            let mut output = format_events(events);
            if outcome.status == TurnStatus::AwaitingDecision
                && let Some(decision) = state.pending_decision()
            {
                output.push('\n');
                output.push_str(&render_decision(decision));
            } else {
                output.push_str(&next_to_move(state));
            }
            output
        }
        Response::Decided { events, .. } => {
            let mut output = format_events(events);
            output.push_str(&next_to_move(state));
            output
        }
        Response::Status => render_status(state),
        Response::Board => render_board(&state.board),
        Response::Log(lines) => render_log(state, *lines),
        Response::Help => format_help(),
        Response::Quit => "Goodbye.\n".to_string(),
    }
}

fn format_events(events: &[GameEvent]) -> String {
    events.iter().map(|event| format!("{event}\n")).collect()
}

fn next_to_move(state: &GameState) -> String {
    let player = state.current_player();
    format!("{} to move (${}).\n", player.name, player.money)
}

fn format_help() -> String {
    let mut output = String::from("Commands:\n");
    for (usage, description) in KNOWN_COMMANDS {
        output.push_str(&format!("  {usage:<12} {description}\n"));
    }
    output
}
