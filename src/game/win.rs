//! Four-in-a-row detection around the most recently placed mark.

use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Direction vectors (row step, col step): horizontal, vertical, and the two
/// diagonals. Each is scanned in both senses through the played cell.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// How far the scan reaches on either side of the played cell.
const REACH: isize = 3;

/// Check whether the mark at (`row`, `col`) completes four in a row for
/// `player`.
///
/// Only the lines through the given cell are examined, so this must be
/// called with the coordinate of the last placed mark.
pub fn check_win(board: &Board, row: usize, col: usize, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| run_reaches_four(board, row, col, player, dr, dc))
}

fn run_reaches_four(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
    dr: isize,
    dc: isize,
) -> bool {
    let cell = player.to_cell();
    let mut count = 0;

    for i in -REACH..=REACH {
        let r = row as isize + i * dr;
        let c = col as isize + i * dc;
        let in_bounds = r >= 0 && r < ROWS as isize && c >= 0 && c < COLS as isize;

        if in_bounds && board.get(r as usize, c as usize) == cell {
            count += 1;
            if count == 4 {
                return true;
            }
        } else {
            count = 0;
        }
    }

    false
}
