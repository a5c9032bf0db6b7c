//! Terminal state detection for a board position

use crate::board::{Board, Cell, Side};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

/// The result of scanning a board for a finished game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    Win(Side),
    Draw,
}

/// Scans the board for four-in-a-row in any orientation, falling back to
/// a draw check when no win exists.
///
/// The passes run in a fixed order (horizontal, vertical, major diagonal,
/// minor diagonal) but the outcome is order-independent: a legal game
/// trajectory holds at most one winning alignment owner at a time.
pub fn evaluate(board: &Board) -> Outcome {
    // horizontal
    for row in 0..HEIGHT {
        if let Some(side) = line_winner(board, (row, 0), (0, 1)) {
            return Outcome::Win(side);
        }
    }

    // vertical
    for column in 0..WIDTH {
        if let Some(side) = line_winner(board, (0, column), (1, 0)) {
            return Outcome::Win(side);
        }
    }

    // major diagonals (top-left to bottom-right), seeded from every edge
    // cell whose diagonal holds at least WIN_LENGTH cells
    for row in 0..=HEIGHT - WIN_LENGTH {
        if let Some(side) = line_winner(board, (row, 0), (1, 1)) {
            return Outcome::Win(side);
        }
    }
    for column in 1..=WIDTH - WIN_LENGTH {
        if let Some(side) = line_winner(board, (0, column), (1, 1)) {
            return Outcome::Win(side);
        }
    }

    // minor diagonals (top-right to bottom-left)
    for column in WIN_LENGTH - 1..WIDTH {
        if let Some(side) = line_winner(board, (0, column), (1, -1)) {
            return Outcome::Win(side);
        }
    }
    for row in 1..=HEIGHT - WIN_LENGTH {
        if let Some(side) = line_winner(board, (row, WIDTH - 1), (1, -1)) {
            return Outcome::Win(side);
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Slides a run-length counter along the line starting at `start` and
/// stepping by `step`, reporting the owner of the first run of
/// WIN_LENGTH tiles. The counter resets whenever the occupant changes,
/// with empty cells breaking any run.
fn line_winner(board: &Board, start: (usize, usize), step: (isize, isize)) -> Option<Side> {
    let (mut row, mut column) = (start.0 as isize, start.1 as isize);
    let mut occupant = Cell::Empty;
    let mut run = 0;

    while (0..HEIGHT as isize).contains(&row) && (0..WIDTH as isize).contains(&column) {
        let cell = board.cell(row as usize, column as usize);
        if cell == occupant {
            run += 1;
        } else {
            occupant = cell;
            run = 1;
        }
        if run == WIN_LENGTH {
            if let Cell::Taken(side) = occupant {
                return Some(side);
            }
        }
        row += step.0;
        column += step.1;
    }
    None
}
