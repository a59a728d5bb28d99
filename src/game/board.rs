//! The fixed 24-tile board.

use crate::game::PlayerId;

/// Number of tiles on the board.
pub const BOARD_SIZE: usize = 24;

/// What happens when a player lands on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// The starting corner. Passing it pays a bonus; landing does nothing.
    Start,
    /// A purchasable asset that earns rent once owned.
    Asset {
        /// Purchase price.
        cost: i32,
        /// Rent paid by the other player on landing.
        rent: i32,
    },
    /// The bank pays the player.
    Income {
        /// Amount collected.
        amount: i32,
    },
    /// The player pays the bank.
    Expense {
        /// Amount paid.
        amount: i32,
    },
    /// Draw a chance card.
    Chance,
    /// Nothing happens.
    Empty,
    /// Declared but without an effect yet; behaves like `Empty`.
    Penalty,
}

impl TileKind {
    /// Short lowercase label, used by the text and JSON renderers.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TileKind::Start => "start",
            TileKind::Asset { .. } => "asset",
            TileKind::Income { .. } => "income",
            TileKind::Expense { .. } => "expense",
            TileKind::Chance => "chance",
            TileKind::Empty => "empty",
            TileKind::Penalty => "penalty",
        }
    }
}

/// A single tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// Display name.
    pub name: &'static str,
    /// Tile effect.
    pub kind: TileKind,
    /// Owner of an asset tile (None = unowned). Always None for other kinds.
    pub owner: Option<PlayerId>,
}

impl Tile {
    /// Create an unowned tile.
    #[must_use]
    pub const fn new(name: &'static str, kind: TileKind) -> Self {
        Self {
            name,
            kind,
            owner: None,
        }
    }

    /// Create an asset tile.
    #[must_use]
    pub const fn asset(name: &'static str, cost: i32, rent: i32) -> Self {
        Self::new(name, TileKind::Asset { cost, rent })
    }

    /// Purchase price, if this tile is an asset.
    #[must_use]
    pub const fn cost(&self) -> Option<i32> {
        match self.kind {
            TileKind::Asset { cost, .. } => Some(cost),
            _ => None,
        }
    }

    /// Check if this tile can be bought.
    #[must_use]
    pub const fn is_asset(&self) -> bool {
        matches!(self.kind, TileKind::Asset { .. })
    }
}

/// Tile layout, starting at START and running in the direction of travel.
const STANDARD_TILES: [Tile; BOARD_SIZE] = [
    Tile::new("START", TileKind::Start),
    Tile::asset("Stock Market", 100, 10),
    Tile::new("Community Chest", TileKind::Chance),
    Tile::asset("Real Estate", 150, 15),
    Tile::new("Pay Day", TileKind::Income { amount: 200 }),
    Tile::asset("Side Hustle", 50, 5),
    Tile::new("Unexpected Bill", TileKind::Expense { amount: 75 }),
    Tile::asset("Tech Startup", 250, 25),
    Tile::new("Just Visiting", TileKind::Empty),
    Tile::new("Gig Economy", TileKind::Chance),
    Tile::asset("Crypto", 200, 20),
    Tile::new("Student Loan", TileKind::Expense { amount: 100 }),
    Tile::new("Freelance Work", TileKind::Income { amount: 150 }),
    Tile::asset("Savings Bond", 120, 12),
    Tile::new("Community Chest", TileKind::Chance),
    Tile::asset("Small Business", 180, 18),
    Tile::new("Go To Class", TileKind::Penalty),
    Tile::asset("Index Fund", 220, 22),
    Tile::new("Unexpected Bill", TileKind::Expense { amount: 50 }),
    Tile::asset("Rental Property", 300, 30),
    Tile::new("Scholarship", TileKind::Income { amount: 100 }),
    Tile::asset("Part-time Job", 80, 8),
    Tile::new("Community Chest", TileKind::Chance),
    Tile::asset("401k", 280, 28),
];

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Tiles in travel order; index 0 is START.
    tiles: Vec<Tile>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Create the standard board with every asset unowned.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            tiles: STANDARD_TILES.to_vec(),
        }
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the board has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Get all tiles.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get a tile by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Get a mutable tile by index.
    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Iterate over `(index, tile)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Tile)> {
        self.tiles.iter().enumerate()
    }

    /// Iterate over assets owned by a player.
    pub fn owned_by(&self, player: PlayerId) -> impl Iterator<Item = (usize, &Tile)> {
        self.iter().filter(move |(_, tile)| tile.owner == Some(player))
    }

    /// Combined purchase price of every asset a player owns.
    #[must_use]
    pub fn holdings_value(&self, player: PlayerId) -> i32 {
        self.owned_by(player).filter_map(|(_, tile)| tile.cost()).sum()
    }

    /// Position reached after moving `steps` tiles forward from `from`.
    #[must_use]
    pub fn advance(&self, from: usize, steps: usize) -> usize {
        (from + steps) % self.tiles.len()
    }
}
