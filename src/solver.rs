//! An agent to pick strong moves in a game of Connect 4

use rayon::prelude::*;

use crate::board::{Board, Side};
use crate::eval;
use crate::referee::{self, Outcome};
use crate::WIDTH;

/// The fixed depth at which the search hands over to static evaluation
pub const DEPTH_LIMIT: usize = 5;

/// The score of an immediate win; wins found `d` plies down score
/// `WIN_SCORE - d`, so faster wins and slower losses are preferred
pub const WIN_SCORE: i32 = 100;

/// An agent to find the best move in a Connect 4 position
///
/// # Notes
/// This agent runs a depth-limited minimax search with alpha-beta
/// pruning over its own copy of the board, mutating and undoing moves in
/// place as it descends and backtracks. Terminal positions are scored
/// exactly; positions at the depth limit are scored heuristically.
///
/// # Position Scoring
/// A win for the searching side found `d` plies deep scores
/// `WIN_SCORE - d`, a loss scores `d - WIN_SCORE` and a draw scores 0.
/// Non-terminal frontier positions take their heuristic evaluation,
/// which is always well inside the win/loss band.
pub struct Solver {
    board: Board,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` searching from the given position
    pub fn new(board: Board) -> Self {
        Self {
            board,
            node_count: 0,
        }
    }

    /// Calculates the best column for `side` to play next, along with
    /// the score the search assigned to it
    ///
    /// Columns are explored in ascending order, so among equally scored
    /// moves the lowest column index wins. This tie-break is part of the
    /// contract: repeated calls on the same position return the same move.
    pub fn solve(&mut self, side: Side) -> (i32, usize) {
        // fixed opening: always take the centre of an empty board
        if self.board.is_empty() {
            return (0, WIDTH / 2);
        }
        debug_assert!(referee::evaluate(&self.board) == Outcome::InProgress);

        self.node_count += 1;

        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        let mut best_score = i32::MIN;
        let mut best_move = 0;

        for column in 0..WIDTH {
            let row = match self.board.drop(column, side) {
                Ok(row) => row,
                Err(_) => continue,
            };
            let score = self.minimax(side, false, alpha, beta, 1);
            self.board.undo(row, column);

            if score > best_score {
                best_score = score;
                best_move = column;
            }
            alpha = alpha.max(score);
            // beta stays at +infinity at the root, so no cutoff fires here
            if alpha >= beta {
                break;
            }
        }

        (best_score, best_move)
    }

    /// Convenience wrapper around [`solve`](Solver::solve) returning only the column
    pub fn best_move(&mut self, side: Side) -> usize {
        self.solve(side).1
    }

    /// Like [`solve`](Solver::solve), but explores the root moves in
    /// parallel on the rayon thread pool, each worker searching its own
    /// clone of the board with a full alpha-beta window.
    ///
    /// The merge keeps the lowest column among equal top scores, so the
    /// chosen move matches the sequential search exactly.
    pub fn solve_parallel(&mut self, side: Side) -> (i32, usize) {
        if self.board.is_empty() {
            return (0, WIDTH / 2);
        }
        debug_assert!(referee::evaluate(&self.board) == Outcome::InProgress);

        self.node_count += 1;

        let root = &self.board;
        let children: Vec<(usize, i32, usize)> = (0..WIDTH)
            .into_par_iter()
            .filter_map(|column| {
                let mut child = Solver::new(root.clone());
                child.board.drop(column, side).ok()?;
                let score = child.minimax(side, false, i32::MIN, i32::MAX, 1);
                Some((column, score, child.node_count))
            })
            .collect();

        let mut best_score = i32::MIN;
        let mut best_move = 0;
        for &(column, score, nodes) in children.iter() {
            self.node_count += nodes;
            if score > best_score {
                best_score = score;
                best_move = column;
            }
        }

        (best_score, best_move)
    }

    /// Performs the recursive game tree search
    ///
    /// `side` is the side the search maximizes for; `maximizing` flips
    /// with ply parity. Fail-soft: the returned value may be a bound
    /// rather than the exact minimax score once a cutoff has fired, which
    /// only ever affects subtrees the root has already ruled out.
    fn minimax(
        &mut self,
        side: Side,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        depth: usize,
    ) -> i32 {
        self.node_count += 1;

        // exact scores for finished games, preferring fast wins and slow losses
        match referee::evaluate(&self.board) {
            Outcome::Win(winner) => {
                return if winner == side {
                    WIN_SCORE - depth as i32
                } else {
                    depth as i32 - WIN_SCORE
                };
            }
            Outcome::Draw => return 0,
            Outcome::InProgress => {}
        }

        if depth == DEPTH_LIMIT {
            return eval::score(&self.board, side);
        }

        if maximizing {
            let mut best = i32::MIN;
            for column in 0..WIDTH {
                let row = match self.board.drop(column, side) {
                    Ok(row) => row,
                    Err(_) => continue,
                };
                let score = self.minimax(side, false, alpha, beta, depth + 1);
                // the undo must run on every path, cutoffs included
                self.board.undo(row, column);

                best = best.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
            best
        } else {
            let mut worst = i32::MAX;
            for column in 0..WIDTH {
                let row = match self.board.drop(column, side.opponent()) {
                    Ok(row) => row,
                    Err(_) => continue,
                };
                let score = self.minimax(side, true, alpha, beta, depth + 1);
                self.board.undo(row, column);

                worst = worst.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            worst
        }
    }
}
