//! Player state management.

/// Identifier for a player: 1 or 2.
pub type PlayerId = u8;

/// Number of players in a game.
pub const NUM_PLAYERS: usize = 2;

/// Balance each player starts with.
pub const STARTING_MONEY: i64 = 1500;

/// State for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Unique identifier for this player.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Cash balance. May go negative; there is no bankruptcy rule.
    pub money: i64,
    /// Index of the tile the player stands on.
    pub position: usize,
}

impl Player {
    /// Create a new player on START with the starting balance.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            money: STARTING_MONEY,
            position: 0,
        }
    }

    /// Check if the player can pay `amount` without going negative.
    #[must_use]
    pub const fn can_afford(&self, amount: i32) -> bool {
        self.money >= amount as i64
    }

    /// Add (or with a negative delta, remove) money.
    ///
    /// Deltas are `i32` and balances `i64`, so no reachable sequence of
    /// adjustments overflows.
    pub fn adjust(&mut self, delta: i32) {
        self.money += i64::from(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new(1, "Player 1");
        assert_eq!(player.id, 1);
        assert_eq!(player.name, "Player 1");
        assert_eq!(player.money, STARTING_MONEY);
        assert_eq!(player.position, 0);
    }

    #[test]
    fn test_player_can_afford_exact_balance() {
        let player = Player::new(2, "Player 2");
        assert!(player.can_afford(1500));
        assert!(!player.can_afford(1501));
    }

    #[test]
    fn test_player_adjust_may_go_negative() {
        let mut player = Player::new(1, "Player 1");
        player.adjust(-2000);
        assert_eq!(player.money, -500);
        player.adjust(700);
        assert_eq!(player.money, 200);
    }

    #[test]
    fn test_player_adjust_is_exact_past_i32_range() {
        let mut player = Player::new(1, "Player 1");
        player.money = i64::from(i32::MIN) + 5;
        player.adjust(-30);
        assert_eq!(player.money, i64::from(i32::MIN) - 25);

        player.money = i64::from(i32::MAX);
        player.adjust(i32::MAX);
        assert_eq!(player.money, 2 * i64::from(i32::MAX));
    }
}
