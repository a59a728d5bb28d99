//! Game state and the turn engine.

use tracing::{debug, warn};

use crate::error::{GameError, GameResult};
use crate::game::{
    buy_asset, resolve_tile, Board, Choice, DecisionKind, EventLog, GameEvent, PendingDecision,
    Player, PlayerId, RandomSource, DIE_FACES, NUM_PLAYERS,
};

/// Bonus paid for moving past START.
pub const PASS_START_BONUS: i32 = 200;

/// Settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Display names for player 1 and player 2.
    pub player_names: [String; NUM_PLAYERS],
    /// Seed for dice and chance draws (None = seed from entropy).
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
            seed: None,
        }
    }
}

/// Whether a turn finished or is waiting on the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The turn ended and play passed to the other player.
    Completed,
    /// A decision must be answered before the turn can end.
    AwaitingDecision,
}

/// Summary of one roll-move-resolve cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Who moved.
    pub player: PlayerId,
    /// Die value.
    pub roll: u8,
    /// Position before the move.
    pub from: usize,
    /// Position after the move.
    pub to: usize,
    /// Whether the move went past START.
    pub passed_start: bool,
    /// Whether the turn ended or is waiting for a decision.
    pub status: TurnStatus,
}

/// Result of answering a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionOutcome {
    /// Who decided.
    pub player: PlayerId,
    /// What was chosen.
    pub choice: Choice,
    /// Asset bought, if any.
    pub bought: Option<usize>,
}

/// Complete game state.
///
/// All mutation goes through [`take_turn`](Self::take_turn),
/// [`play_turn`](Self::play_turn) and [`choose`](Self::choose). While a
/// decision is pending the turn pointer is frozen and rolling is refused.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The board, including asset ownership.
    pub board: Board,
    /// Both players, in turn order.
    pub players: [Player; NUM_PLAYERS],
    /// Index into `players` of the player to act.
    current: usize,
    /// Number of completed turns.
    turn: u32,
    /// Decision blocking the current turn.
    pending: Option<PendingDecision>,
    /// Most recent die value.
    last_roll: Option<u8>,
    /// Event feed for display.
    log: EventLog,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl GameState {
    /// Create a new game on the standard board.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let [first, second] = &config.player_names;
        let mut log = EventLog::new();
        log.push(GameEvent::GameStarted);

        Self {
            board: Board::standard(),
            players: [Player::new(1, first.clone()), Player::new(2, second.clone())],
            current: 0,
            turn: 0,
            pending: None,
            last_roll: None,
            log,
        }
    }

    /// Index of the player to act.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The player to act.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Number of completed turns.
    #[must_use]
    pub const fn turn(&self) -> u32 {
        self.turn
    }

    /// The decision blocking the current turn, if any.
    #[must_use]
    pub const fn pending_decision(&self) -> Option<&PendingDecision> {
        self.pending.as_ref()
    }

    /// Check if the dice may be rolled.
    #[must_use]
    pub const fn can_roll(&self) -> bool {
        self.pending.is_none()
    }

    /// Most recent die value.
    #[must_use]
    pub const fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    /// The event log.
    #[must_use]
    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    /// Get a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Sum of all player balances.
    #[must_use]
    pub fn total_money(&self) -> i64 {
        self.players.iter().map(|p| p.money).sum()
    }

    /// Roll the die for the current player and take the turn.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::DecisionPending`] while a decision is waiting.
    pub fn play_turn<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> GameResult<TurnOutcome> {
        if self.pending.is_some() {
            warn!("roll refused: decision pending");
            return Err(GameError::DecisionPending);
        }
        let roll = rng.roll_die();
        self.take_turn(roll, rng)
    }

    /// Take the current player's turn with a given die value.
    ///
    /// Moves the player, pays the START bonus on wraparound and resolves the
    /// tile. If the tile needs no decision the turn ends here; otherwise the
    /// decision is stored and the turn pointer stays put until
    /// [`choose`](Self::choose).
    ///
    /// # Errors
    ///
    /// Returns an error if a decision is pending or the roll is not in `1..=6`.
    pub fn take_turn<R: RandomSource + ?Sized>(
        &mut self,
        roll: u8,
        rng: &mut R,
    ) -> GameResult<TurnOutcome> {
        if self.pending.is_some() {
            return Err(GameError::DecisionPending);
        }
        if !(1..=DIE_FACES).contains(&roll) {
            return Err(GameError::InvalidRoll(roll));
        }

        let current = self.current;
        let from = self.players[current].position;
        let to = self.board.advance(from, usize::from(roll));
        let passed_start = to < from;
        let tile_name = self
            .board
            .get(to)
            .ok_or(GameError::InvalidTileIndex {
                index: to,
                len: self.board.len(),
            })?
            .name;

        self.last_roll = Some(roll);
        let player = &mut self.players[current];
        self.log.push(GameEvent::Rolled {
            player: player.name.clone(),
            roll,
        });
        if passed_start {
            player.adjust(PASS_START_BONUS);
            self.log.push(GameEvent::PassedStart {
                player: player.name.clone(),
                bonus: PASS_START_BONUS,
            });
        }
        player.position = to;
        debug!(player = %player.name, roll, from, to, passed_start, "moved");

        self.log.push(GameEvent::Landed {
            player: player.name.clone(),
            tile: tile_name,
        });

        let decision = resolve_tile(
            &self.board,
            &mut self.players,
            current,
            to,
            rng,
            &mut self.log,
        )?;

        let status = if let Some(decision) = decision {
            debug!(title = %decision.title, "awaiting decision");
            self.pending = Some(decision);
            TurnStatus::AwaitingDecision
        } else {
            self.end_turn();
            TurnStatus::Completed
        };

        Ok(TurnOutcome {
            player: self.players[current].id,
            roll,
            from,
            to,
            passed_start,
            status,
        })
    }

    /// Answer the pending decision with the option at `index` and end the turn.
    ///
    /// The choice is validated when committed: buying re-checks ownership and
    /// the balance. On error nothing changes and the decision stays pending.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is pending, the index is out of range, or
    /// the purchase is rejected.
    pub fn choose(&mut self, index: usize) -> GameResult<DecisionOutcome> {
        let Some(decision) = self.pending.as_ref() else {
            return Err(GameError::NoPendingDecision);
        };
        let option = decision.option(index).ok_or(GameError::InvalidOption {
            index,
            available: decision.options.len(),
        })?;
        let choice = option.choice;
        self.commit(choice)
    }

    /// Answer the pending decision with the first option of the given kind.
    ///
    /// Asking to buy an asset whose prompt only offers "Okay" still goes
    /// through the purchase check, so it fails with the reason the asset
    /// cannot be bought.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is pending, no option has that choice, or
    /// the choice is rejected.
    pub fn choose_by(&mut self, choice: Choice) -> GameResult<DecisionOutcome> {
        let decision = self.pending.as_ref().ok_or(GameError::NoPendingDecision)?;
        if let Some(index) = decision.position_of(choice) {
            return self.choose(index);
        }
        if choice == Choice::Buy && matches!(decision.kind, DecisionKind::Purchase { .. }) {
            return self.commit(Choice::Buy);
        }
        Err(GameError::InvalidOption {
            index: decision.options.len(),
            available: decision.options.len(),
        })
    }

    /// Apply `choice` to the pending decision and end the turn.
    fn commit(&mut self, choice: Choice) -> GameResult<DecisionOutcome> {
        let kind = self
            .pending
            .as_ref()
            .ok_or(GameError::NoPendingDecision)?
            .kind;

        let current = self.current;
        let mut bought = None;
        match (choice, kind) {
            (Choice::Buy, DecisionKind::Purchase { tile }) => {
                buy_asset(
                    &mut self.board,
                    &mut self.players[current],
                    tile,
                    &mut self.log,
                )?;
                bought = Some(tile);
            }
            (Choice::Pass, DecisionKind::Purchase { tile }) => {
                let name = self.board.get(tile).map_or("", |t| t.name);
                self.log.push(GameEvent::Declined {
                    player: self.players[current].name.clone(),
                    tile: name,
                });
            }
            _ => {}
        }

        let player = self.players[current].id;
        self.pending = None;
        self.end_turn();

        Ok(DecisionOutcome {
            player,
            choice,
            bought,
        })
    }

    /// Hand play to the other player.
    fn end_turn(&mut self) {
        self.current = (self.current + 1) % NUM_PLAYERS;
        self.turn += 1;
    }
}
