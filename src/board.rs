use std::fmt;

use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH};

/// One of the two players. The engine is side-agnostic: 'human' and 'AI'
/// are role labels the driver binds to a side.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Taken(Side),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Returned by [`Board::drop`] when the column already holds six tiles.
///
/// Callers treat this as "skip this input/candidate", never as fatal.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ColumnFull(pub usize);

impl fmt::Display for ColumnFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column {} is full", self.0 + 1)
    }
}

impl std::error::Error for ColumnFull {}

/// The 6x7 game grid.
///
/// Cells are stored row-major with row 0 at the top, so row 5 is the
/// bottom of each column. A cell above an empty cell is always empty;
/// the invariant is maintained by funnelling every mutation through
/// [`drop`](Board::drop)/[`undo`](Board::undo) pairs.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: [Cell; WIDTH * HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; WIDTH * HEIGHT],
        }
    }

    /// Builds a board from a string of 1-indexed column digits,
    /// alternating sides starting with [`Side::First`]
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut side = Side::First;

        for column_char in moves.as_ref().chars() {
            // only play available moves
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board
                        .drop(column - 1, side)
                        .map_err(|_| anyhow!("Invalid move, column {} full", column))?;
                    side = side.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// Fills the lowest empty cell of `column` with a tile for `side`,
    /// returning the row it landed in. The board is unchanged on failure.
    pub fn drop(&mut self, column: usize, side: Side) -> Result<usize, ColumnFull> {
        for row in (0..HEIGHT).rev() {
            if self.cells[Self::index(row, column)].is_empty() {
                self.cells[Self::index(row, column)] = Cell::Taken(side);
                return Ok(row);
            }
        }
        Err(ColumnFull(column))
    }

    /// Empties the cell filled by the most recent [`drop`](Board::drop) in
    /// `column`. `row` must be the row that drop returned; this is a
    /// precondition of the search's descend/backtrack discipline and is
    /// not re-validated in release builds.
    pub fn undo(&mut self, row: usize, column: usize) {
        debug_assert!(!self.cells[Self::index(row, column)].is_empty());
        debug_assert!(row == 0 || self.cells[Self::index(row - 1, column)].is_empty());
        self.cells[Self::index(row, column)] = Cell::Empty;
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[Self::index(row, column)]
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    fn index(row: usize, column: usize) -> usize {
        row * WIDTH + column
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
