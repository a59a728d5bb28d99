//! Chance cards.

use crate::game::RandomSource;

/// A chance card: flavour text and the money it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChanceCard {
    /// Text shown to the player.
    pub text: &'static str,
    /// Money added to (positive) or taken from (negative) the player.
    pub delta: i32,
}

/// The fixed deck. Cards are drawn with replacement.
pub const CHANCE_CARDS: [ChanceCard; 4] = [
    ChanceCard {
        text: "You won a hackathon! Collect $100.",
        delta: 100,
    },
    ChanceCard {
        text: "Your bike got a flat tire. Pay $50 for repairs.",
        delta: -50,
    },
    ChanceCard {
        text: "Stock dividend! Collect $75.",
        delta: 75,
    },
    ChanceCard {
        text: "You forgot your friend's birthday. Pay $25 for a last-minute gift.",
        delta: -25,
    },
];

/// Draw a card uniformly from the deck.
///
/// Returns the card together with its index in [`CHANCE_CARDS`].
pub fn draw_card<R: RandomSource + ?Sized>(rng: &mut R) -> (usize, ChanceCard) {
    // Custom sources may hand back an out-of-range index.
    let index = rng.draw_index(CHANCE_CARDS.len()) % CHANCE_CARDS.len();
    (index, CHANCE_CARDS[index])
}
