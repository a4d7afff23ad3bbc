use std::fmt;

use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Index of the center column, weighted by the heuristic.
pub const CENTER_COL: usize = COLS / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Human,
    Computer,
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Human),
            'O' => Some(Cell::Computer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Parse a board from its ASCII rendering, top row first.
    ///
    /// Accepts exactly `ROWS` lines of `COLS` symbols (`.`, `X`, `O`) and
    /// rejects grids with a mark floating above an empty cell.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount {
                expected: ROWS,
                found: rows.len(),
            });
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row,
                    expected: COLS,
                    found: symbols.len(),
                });
            }
            for (col, &c) in symbols.iter().enumerate() {
                board.cells[row][col] = Cell::from_symbol(c)
                    .ok_or(BoardParseError::UnknownSymbol { row, symbol: c })?;
            }
        }

        for col in 0..COLS {
            for row in 0..ROWS - 1 {
                if board.cells[row][col] != Cell::Empty && board.cells[row + 1][col] == Cell::Empty {
                    return Err(BoardParseError::FloatingMark { row, col });
                }
            }
        }

        Ok(board)
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a piece dropped into `col` would land on, or `None` when the
    /// column is full or out of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn place(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        let row = self
            .lowest_empty_row(col)
            .ok_or(MoveError::InvalidColumn(col))?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Clear the topmost mark in `col`. Only the search uses this, to revert
    /// its own scratch placements.
    pub(crate) fn lift(&mut self, col: usize) {
        if let Some(row) = (0..ROWS).find(|&row| self.cells[row][col] != Cell::Empty) {
            self.cells[row][col] = Cell::Empty;
        }
    }

    /// Columns that can still take a piece, in ascending order
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of marks on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Left-right reflection of the board
    pub fn mirrored(&self) -> Board {
        let mut mirrored = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                mirrored.cells[row][COLS - 1 - col] = self.cells[row][col];
            }
        }
        mirrored
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            if i + 1 < ROWS {
                writeln!(f, "{line}")?;
            } else {
                write!(f, "{line}")?;
            }
        }
        Ok(())
    }
}
