//! Read-only views of a game for front ends.
//!
//! Nothing here mutates the game. Front ends either print the text views,
//! serialize a [`Snapshot`], or place tiles with [`ring_cell`].

mod snapshot;
mod text;

pub use snapshot::{DecisionSnapshot, PlayerSnapshot, Snapshot, TileSnapshot};
pub use text::{render_board, render_decision, render_log, render_status};

use crate::game::BOARD_SIZE;

/// Cells per side of the square ring the board is drawn on.
pub const RING_SIDE: usize = 7;

/// Grid cell `(row, col)` of a tile on a `RING_SIDE`×`RING_SIDE` ring.
///
/// Tile 0 sits in the bottom-right corner. Travel runs left along the bottom
/// row, up the left column, right along the top row and down the right column:
///
/// ```text
///  12 13 14 15 16 17 18
///  11                19
///  10                20
///   9                21
///   8                22
///   7                23
///   6  5  4  3  2  1  0
/// ```
///
/// Returns `None` for indices off the board.
#[must_use]
pub const fn ring_cell(index: usize) -> Option<(usize, usize)> {
    const LAST: usize = RING_SIDE - 1;
    if index >= BOARD_SIZE {
        return None;
    }
    let cell = if index <= LAST {
        (LAST, LAST - index)
    } else if index <= 2 * LAST {
        (2 * LAST - index, 0)
    } else if index <= 3 * LAST {
        (0, index - 2 * LAST)
    } else {
        (index - 3 * LAST, LAST)
    };
    Some(cell)
}
