//! Heuristic static evaluation for positions at the search depth limit

use crate::board::{Board, Cell, Side};
use crate::referee::{self, Outcome};
use crate::{HEIGHT, WIDTH, WIN_LENGTH};

// fixed window weights, no tuning knobs
const THREE_WITH_GAP: i32 = 6;
const TWO_WITH_GAPS: i32 = 3;
const OPPONENT_THREAT: i32 = -2;

/// Vertical windows in the centre column count three times over
const CENTRE_WEIGHT: i32 = 3;

const CENTRE_COLUMN: usize = WIDTH / 2;

/// Scores a non-terminal board from the perspective of `side` by sliding
/// a four-cell window across every row, column and diagonal.
///
/// Must not be called on a board that already contains a win; the search
/// only reaches this at the depth frontier, after the terminal check.
pub fn score(board: &Board, side: Side) -> i32 {
    debug_assert!(!matches!(referee::evaluate(board), Outcome::Win(_)));

    let mut total = 0;

    // horizontal windows
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - WIN_LENGTH {
            total += window_score(
                board,
                side,
                [
                    (row, column),
                    (row, column + 1),
                    (row, column + 2),
                    (row, column + 3),
                ],
            );
        }
    }

    // vertical windows, weighting centre column control
    for column in 0..WIDTH {
        let weight = if column == CENTRE_COLUMN {
            CENTRE_WEIGHT
        } else {
            1
        };
        for row in 0..=HEIGHT - WIN_LENGTH {
            total += weight
                * window_score(
                    board,
                    side,
                    [
                        (row, column),
                        (row + 1, column),
                        (row + 2, column),
                        (row + 3, column),
                    ],
                );
        }
    }

    // major diagonal windows (top-left to bottom-right)
    for row in 0..=HEIGHT - WIN_LENGTH {
        for column in 0..=WIDTH - WIN_LENGTH {
            total += window_score(
                board,
                side,
                [
                    (row, column),
                    (row + 1, column + 1),
                    (row + 2, column + 2),
                    (row + 3, column + 3),
                ],
            );
        }
    }

    // minor diagonal windows (top-right to bottom-left)
    for row in 0..=HEIGHT - WIN_LENGTH {
        for column in WIN_LENGTH - 1..WIDTH {
            total += window_score(
                board,
                side,
                [
                    (row, column),
                    (row + 1, column - 1),
                    (row + 2, column - 2),
                    (row + 3, column - 3),
                ],
            );
        }
    }

    total
}

fn window_score(board: &Board, side: Side, cells: [(usize, usize); WIN_LENGTH]) -> i32 {
    let mut mine = 0;
    let mut empty = 0;
    for &(row, column) in cells.iter() {
        match board.cell(row, column) {
            Cell::Taken(owner) if owner == side => mine += 1,
            Cell::Empty => empty += 1,
            Cell::Taken(_) => {}
        }
    }
    let theirs = WIN_LENGTH - mine - empty;

    if mine == 3 && empty == 1 {
        THREE_WITH_GAP
    } else if mine == 2 && empty == 2 {
        TWO_WITH_GAPS
    } else if theirs == 3 && empty == 1 {
        OPPONENT_THREAT
    } else {
        0
    }
}
