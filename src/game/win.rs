//! Four-in-a-row detection.

use super::board::{Board, PlayerId, COLS, ROWS};

/// (row, col) board coordinate.
pub type Coord = (usize, usize);

/// The four cells of a detected line, in scan order.
pub type WinningLine = [Coord; 4];

/// Scan the whole board for four discs of `player` in a straight line.
///
/// Orientations are checked horizontal, vertical, diagonal down-right, then
/// diagonal down-left, row-major within each, and the first hit is returned.
/// Only one disc lands per turn so at most one new line can appear, but the
/// fixed order keeps the reported line deterministic when a single disc
/// completes more than one. Returns `None` when no line exists.
///
/// O(rows x cols) per call; it runs once per drop, so no incremental
/// bookkeeping is needed.
pub fn find_winning_sequence(board: &Board, player: PlayerId) -> Option<WinningLine> {
    let owns = |row: usize, col: usize| board.cell(row, col) == Some(player);

    // Horizontal
    for row in 0..ROWS {
        for col in 0..=COLS - 4 {
            if (0..4).all(|i| owns(row, col + i)) {
                return Some(std::array::from_fn(|i| (row, col + i)));
            }
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..=ROWS - 4 {
            if (0..4).all(|i| owns(row + i, col)) {
                return Some(std::array::from_fn(|i| (row + i, col)));
            }
        }
    }

    // Diagonal down-right
    for row in 0..=ROWS - 4 {
        for col in 0..=COLS - 4 {
            if (0..4).all(|i| owns(row + i, col + i)) {
                return Some(std::array::from_fn(|i| (row + i, col + i)));
            }
        }
    }

    // Diagonal down-left
    for row in 0..=ROWS - 4 {
        for col in 3..COLS {
            if (0..4).all(|i| owns(row + i, col - i)) {
                return Some(std::array::from_fn(|i| (row + i, col - i)));
            }
        }
    }

    None
}
