//! Decisions a turn can stop on.
//!
//! When a tile effect needs a human answer, the resolver returns a
//! [`PendingDecision`] instead of calling back into the front end. The front
//! end displays the title, text and option labels, then submits the index of
//! the chosen option to [`GameState::choose`](crate::game::GameState::choose).

use crate::game::ChanceCard;

/// What the player is being asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    /// Buy (or decline) an unowned asset.
    Purchase {
        /// Board index of the asset.
        tile: usize,
    },
    /// Acknowledge a chance card that has already been applied.
    Chance {
        /// The card that was drawn.
        card: ChanceCard,
    },
}

/// Effect of picking an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Buy the asset under the player.
    Buy,
    /// Decline the purchase.
    Pass,
    /// Close the prompt without further effect.
    Acknowledge,
}

/// One selectable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecisionOption {
    /// Button label.
    pub label: &'static str,
    /// What the option does.
    pub choice: Choice,
}

impl DecisionOption {
    /// The "Buy" option.
    pub const BUY: Self = Self {
        label: "Buy",
        choice: Choice::Buy,
    };
    /// The "Pass" option.
    pub const PASS: Self = Self {
        label: "Pass",
        choice: Choice::Pass,
    };
    /// The "Okay" option.
    pub const OKAY: Self = Self {
        label: "Okay",
        choice: Choice::Acknowledge,
    };
}

/// A decision the current player must answer before the turn can end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDecision {
    /// What is being decided.
    pub kind: DecisionKind,
    /// Prompt title.
    pub title: String,
    /// Prompt body.
    pub text: String,
    /// Options in display order.
    pub options: Vec<DecisionOption>,
}

impl PendingDecision {
    /// Offer to buy an asset.
    ///
    /// An affordable asset offers Buy and Pass. Otherwise only Okay is offered
    /// and the text says so.
    #[must_use]
    pub fn purchase(tile: usize, name: &str, cost: i32, balance: i64) -> Self {
        let affordable = balance >= i64::from(cost);
        let mut text = format!("This asset costs ${cost}. Your balance is ${balance}.");
        let options = if affordable {
            vec![DecisionOption::BUY, DecisionOption::PASS]
        } else {
            text.push_str(" You can't afford this.");
            vec![DecisionOption::OKAY]
        };

        Self {
            kind: DecisionKind::Purchase { tile },
            title: format!("Buy {name}?"),
            text,
            options,
        }
    }

    /// Show a chance card that has been applied.
    #[must_use]
    pub fn chance(title: &str, card: ChanceCard) -> Self {
        Self {
            kind: DecisionKind::Chance { card },
            title: title.to_string(),
            text: card.text.to_string(),
            options: vec![DecisionOption::OKAY],
        }
    }

    /// Get an option by index.
    #[must_use]
    pub fn option(&self, index: usize) -> Option<DecisionOption> {
        self.options.get(index).copied()
    }

    /// Index of the first option with the given choice.
    #[must_use]
    pub fn position_of(&self, choice: Choice) -> Option<usize> {
        self.options.iter().position(|o| o.choice == choice)
    }
}
