use crate::game::{Board, Cell, Player, CENTER_COL, COLS, ROWS};

/// Trait for scoring a board position at the search horizon.
pub trait Heuristic: Send {
    /// Score from the computer's perspective; positive favors the computer.
    fn evaluate(&self, board: &Board) -> i32;
}

/// Center-column bias plus threat scoring over every 4-cell window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

const CENTER_WEIGHT: i32 = 3;
const FOUR_SCORE: i32 = 100;
const THREE_SCORE: i32 = 5;
const TWO_SCORE: i32 = 2;
const OPPONENT_THREE_PENALTY: i32 = 4;

/// Score one 4-cell window for `player`.
pub fn evaluate_window(window: &[Cell; 4], player: Player) -> i32 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

    let mut score = 0;
    if own == 4 {
        score += FOUR_SCORE;
    } else if own == 3 && empty == 1 {
        score += THREE_SCORE;
    } else if own == 2 && empty == 2 {
        score += TWO_SCORE;
    }
    if opp == 3 && empty == 1 {
        score -= OPPONENT_THREE_PENALTY;
    }
    score
}

/// The four cells starting at (`row`, `col`) and stepping by (`dr`, `dc`).
fn window(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> [Cell; 4] {
    std::array::from_fn(|i| {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        board.get(r as usize, c as usize)
    })
}

/// Every 4-cell window on the board: horizontal, vertical, then both
/// diagonals.
fn windows(board: &Board) -> impl Iterator<Item = [Cell; 4]> + '_ {
    let horizontal = (0..ROWS)
        .flat_map(move |row| (0..COLS - 3).map(move |col| window(board, row, col, 0, 1)));
    let vertical = (0..COLS)
        .flat_map(move |col| (0..ROWS - 3).map(move |row| window(board, row, col, 1, 0)));
    // Top-left to bottom-right
    let falling = (0..ROWS - 3)
        .flat_map(move |row| (0..COLS - 3).map(move |col| window(board, row, col, 1, 1)));
    // Bottom-left to top-right
    let rising = (3..ROWS)
        .flat_map(move |row| (0..COLS - 3).map(move |col| window(board, row, col, -1, 1)));

    horizontal.chain(vertical).chain(falling).chain(rising)
}

/// Window score for `player` summed over the whole board.
pub fn score_position(board: &Board, player: Player) -> i32 {
    windows(board)
        .map(|window| evaluate_window(&window, player))
        .sum()
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board) -> i32 {
        let mut score = 0;

        for row in 0..ROWS {
            match board.get(row, CENTER_COL) {
                Cell::Computer => score += CENTER_WEIGHT,
                Cell::Human => score -= CENTER_WEIGHT,
                Cell::Empty => {}
            }
        }

        score + score_position(board, Player::Computer) - score_position(board, Player::Human)
    }
}
