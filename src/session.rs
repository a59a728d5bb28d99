//! Line-oriented command protocol.
//!
//! A [`Session`] owns a [`GameState`] and its random source and applies text
//! commands to it, one per line. Front ends that cannot link the library
//! directly can drive a game through stdin/stdout with these commands.
//!
//! ## Supported Commands
//!
//! - `roll` - Roll the die for the current player
//! - `roll <n>` - Take the turn with a forced die value
//! - `choose <n>` - Pick option `n` (1-based) of the pending decision
//! - `buy` / `pass` / `ok` - Pick the option with that effect
//! - `status` - Show balances, positions and the pending decision
//! - `board` - Show the board
//! - `log [n]` - Show the `n` most recent log lines (default 10)
//! - `help` - List commands
//! - `quit` - Stop

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::GameError;
use crate::game::{
    assert_invariants, Choice, DecisionOutcome, GameConfig, GameEvent, GameState, RandomSource,
    SeededRandom, TurnOutcome,
};

/// Number of log lines `log` shows without an argument.
pub const DEFAULT_LOG_LINES: usize = 10;

/// The list of known commands, in the order `help` shows them.
pub const KNOWN_COMMANDS: &[(&str, &str)] = &[
    ("roll [n]", "roll the die (or force a value 1-6)"),
    ("choose <n>", "pick option n of the pending decision"),
    ("buy", "buy the asset on offer"),
    ("pass", "decline the asset on offer"),
    ("ok", "acknowledge the prompt"),
    ("status", "show players and any pending decision"),
    ("board", "show the board"),
    ("log [n]", "show the n most recent events"),
    ("help", "list commands"),
    ("quit", "stop"),
];

/// A parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Roll the die, or take the turn with the given value.
    Roll(Option<u8>),
    /// Pick an option by 0-based index.
    Choose(usize),
    /// Pick the first option with this effect.
    Pick(Choice),
    /// Show the game status.
    Status,
    /// Show the board.
    Board,
    /// Show recent log lines.
    Log(usize),
    /// List commands.
    Help,
    /// Stop the session.
    Quit,
}

/// Errors from parsing or executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The line held no command.
    Empty,
    /// The command word is not recognised.
    UnknownCommand(String),
    /// A required argument is missing.
    MissingArgument(&'static str),
    /// An argument could not be parsed.
    InvalidArgument(String),
    /// The game rejected the command.
    Game(GameError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownCommand(cmd) => write!(f, "unknown command '{cmd}'"),
            Self::MissingArgument(arg) => write!(f, "missing argument: {arg}"),
            Self::InvalidArgument(arg) => write!(f, "invalid argument '{arg}'"),
            Self::Game(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<GameError> for SessionError {
    fn from(e: GameError) -> Self {
        Self::Game(e)
    }
}

impl FromStr for Command {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(word) = parts.next() else {
            return Err(SessionError::Empty);
        };
        let arg = parts.next();

        let command = match word.to_lowercase().as_str() {
            "roll" => match arg {
                None => Ok(Self::Roll(None)),
                Some(value) => value
                    .parse::<u8>()
                    .map(|roll| Self::Roll(Some(roll)))
                    .map_err(|_| SessionError::InvalidArgument(value.to_string())),
            },
            "choose" => {
                let value = arg.ok_or(SessionError::MissingArgument("option number"))?;
                match value.parse::<usize>() {
                    Ok(n) if n >= 1 => Ok(Self::Choose(n - 1)),
                    _ => Err(SessionError::InvalidArgument(value.to_string())),
                }
            }
            "buy" => Ok(Self::Pick(Choice::Buy)),
            "pass" => Ok(Self::Pick(Choice::Pass)),
            "ok" | "okay" => Ok(Self::Pick(Choice::Acknowledge)),
            "status" => Ok(Self::Status),
            "board" => Ok(Self::Board),
            "log" => match arg {
                None => Ok(Self::Log(DEFAULT_LOG_LINES)),
                Some(value) => value
                    .parse::<usize>()
                    .map(Self::Log)
                    .map_err(|_| SessionError::InvalidArgument(value.to_string())),
            },
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }?;

        let takes_arg = matches!(command, Self::Roll(_) | Self::Choose(_) | Self::Log(_));
        let extra = if takes_arg { parts.next() } else { arg };
        match extra {
            Some(extra) => Err(SessionError::InvalidArgument(extra.to_string())),
            None => Ok(command),
        }
    }
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// A turn was taken.
    Turn {
        /// Movement and status.
        outcome: TurnOutcome,
        /// Events logged by the turn, oldest first.
        events: Vec<GameEvent>,
    },
    /// A decision was answered.
    Decided {
        /// What was chosen.
        outcome: DecisionOutcome,
        /// Events logged by the decision, oldest first.
        events: Vec<GameEvent>,
    },
    /// Status requested.
    Status,
    /// Board requested.
    Board,
    /// Log requested, with the number of lines.
    Log(usize),
    /// Help requested.
    Help,
    /// The session should stop.
    Quit,
}

/// A game driven by commands.
#[derive(Debug, Clone)]
pub struct Session<R = SeededRandom> {
    state: GameState,
    rng: R,
}

impl Session<SeededRandom> {
    /// Start a game, seeding the dice from the config (or from entropy).
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(SeededRandom::from_entropy, SeededRandom::new);
        Self::with_source(config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// Start a game with a specific random source.
    #[must_use]
    pub fn with_source(config: &GameConfig, rng: R) -> Self {
        Self {
            state: GameState::new(config),
            rng,
        }
    }

    /// The game being played.
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Parse and execute one line.
    ///
    /// Blank lines and `#` comments yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line does not parse or the game rejects it.
    pub fn execute_line(&mut self, line: &str) -> Result<Option<Response>, SessionError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let command = line.parse::<Command>()?;
        self.execute(command).map(Some)
    }

    /// Execute a command.
    ///
    /// # Errors
    ///
    /// Returns an error if the game rejects the command. The game is left
    /// unchanged in that case.
    pub fn execute(&mut self, command: Command) -> Result<Response, SessionError> {
        let mark = self.state.log().len();
        let result = match command {
            Command::Roll(None) => self.state.play_turn(&mut self.rng),
            Command::Roll(Some(roll)) => self.state.take_turn(roll, &mut self.rng),
            Command::Choose(index) => return self.decide(mark, |state| state.choose(index)),
            Command::Pick(choice) => return self.decide(mark, |state| state.choose_by(choice)),
            Command::Status => return Ok(Response::Status),
            Command::Board => return Ok(Response::Board),
            Command::Log(lines) => return Ok(Response::Log(lines)),
            Command::Help => return Ok(Response::Help),
            Command::Quit => return Ok(Response::Quit),
        };

        match result {
            Ok(outcome) => {
                assert_invariants(&self.state);
                Ok(Response::Turn {
                    outcome,
                    events: self.state.log().since(mark).to_vec(),
                })
            }
            Err(e) => {
                warn!(?command, error = %e, "command rejected");
                Err(e.into())
            }
        }
    }

    fn decide(
        &mut self,
        mark: usize,
        apply: impl FnOnce(&mut GameState) -> Result<DecisionOutcome, GameError>,
    ) -> Result<Response, SessionError> {
        match apply(&mut self.state) {
            Ok(outcome) => {
                assert_invariants(&self.state);
                Ok(Response::Decided {
                    outcome,
                    events: self.state.log().since(mark).to_vec(),
                })
            }
            Err(e) => {
                warn!(error = %e, "decision rejected");
                Err(e.into())
            }
        }
    }
}
