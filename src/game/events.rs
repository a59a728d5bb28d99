//! Human-readable game events.

use std::fmt;

/// Something that happened during play.
///
/// Events carry names rather than ids so that a log line can be displayed
/// without the game state at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game began.
    GameStarted,
    /// A player rolled the die.
    Rolled {
        /// Player name.
        player: String,
        /// Die value.
        roll: u8,
    },
    /// A player moved past START.
    PassedStart {
        /// Player name.
        player: String,
        /// Bonus collected.
        bonus: i32,
    },
    /// A player arrived on a tile.
    Landed {
        /// Player name.
        player: String,
        /// Tile name.
        tile: &'static str,
    },
    /// A player bought an asset.
    Bought {
        /// Player name.
        player: String,
        /// Asset name.
        tile: &'static str,
        /// Price paid.
        cost: i32,
    },
    /// A player declined to buy an asset.
    Declined {
        /// Player name.
        player: String,
        /// Asset name.
        tile: &'static str,
    },
    /// Rent changed hands.
    RentPaid {
        /// Paying player name.
        payer: String,
        /// Receiving player name.
        owner: String,
        /// Amount transferred.
        amount: i32,
    },
    /// The bank paid a player.
    Collected {
        /// Player name.
        player: String,
        /// Amount collected.
        amount: i32,
    },
    /// A player paid the bank.
    Paid {
        /// Player name.
        player: String,
        /// Amount paid.
        amount: i32,
    },
    /// A chance card was applied.
    Chance {
        /// Player name.
        player: String,
        /// Card text.
        text: &'static str,
        /// Money moved by the card.
        delta: i32,
    },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::GameStarted => write!(f, "Welcome to Fun Finance!"),
            GameEvent::Rolled { player, roll } => write!(f, "{player} rolled a {roll}."),
            GameEvent::PassedStart { player, bonus } => {
                write!(f, "{player} passed START and collected ${bonus}.")
            }
            GameEvent::Landed { player, tile } => write!(f, "{player} landed on {tile}."),
            GameEvent::Bought { player, tile, cost } => {
                write!(f, "{player} bought {tile} for ${cost}.")
            }
            GameEvent::Declined { player, tile } => write!(f, "{player} passed on {tile}."),
            GameEvent::RentPaid {
                payer,
                owner,
                amount,
            } => write!(f, "{payer} paid ${amount} in rent to {owner}."),
            GameEvent::Collected { player, amount } => write!(f, "{player} collected ${amount}!"),
            GameEvent::Paid { player, amount } => write!(f, "{player} paid ${amount}."),
            GameEvent::Chance { text, .. } => write!(f, "Chance: {text}"),
        }
    }
}

/// Append-only event feed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    /// Events in the order they happened.
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Number of events recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event.
    #[must_use]
    pub fn latest(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter().rev()
    }

    /// Iterate oldest first.
    pub fn chronological(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Events recorded at or after `mark` (a previous [`len`](Self::len)), oldest first.
    #[must_use]
    pub fn since(&self, mark: usize) -> &[GameEvent] {
        self.events.get(mark..).unwrap_or_default()
    }
}
