#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::board::{Board, ColumnFull, Side};
    use crate::eval;
    use crate::referee::{self, Outcome};
    use crate::solver::{Solver, DEPTH_LIMIT, WIN_SCORE};
    use crate::WIDTH;

    // full minimax with no pruning, used as a reference for the
    // alpha-beta equivalence check
    fn minimax_unpruned(board: &mut Board, side: Side, maximizing: bool, depth: usize) -> i32 {
        match referee::evaluate(board) {
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
            return eval::score(board, side);
        }

        let mover = if maximizing { side } else { side.opponent() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for column in 0..WIDTH {
            if let Ok(row) = board.drop(column, mover) {
                let score = minimax_unpruned(board, side, !maximizing, depth + 1);
                board.undo(row, column);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }
        }
        best
    }

    #[test]
    pub fn horizontal_win() -> Result<()> {
        let board = Board::from_moves("1122334")?;
        assert_eq!(referee::evaluate(&board), Outcome::Win(Side::First));
        Ok(())
    }

    #[test]
    pub fn vertical_win() -> Result<()> {
        let board = Board::from_moves("1212121")?;
        assert_eq!(referee::evaluate(&board), Outcome::Win(Side::First));
        Ok(())
    }

    #[test]
    pub fn three_in_a_row_is_not_a_win() -> Result<()> {
        let board = Board::from_moves("112233")?;
        assert_eq!(referee::evaluate(&board), Outcome::InProgress);
        Ok(())
    }

    #[test]
    pub fn major_diagonal_win() -> Result<()> {
        // First holds (2,3), (3,4), (4,5), (5,6); the rest is filler
        let mut board = Board::new();
        for &(column, side) in [
            (3, Side::Second),
            (3, Side::First),
            (3, Side::Second),
            (3, Side::First), // (2,3)
            (4, Side::Second),
            (4, Side::Second),
            (4, Side::First), // (3,4)
            (5, Side::Second),
            (5, Side::First), // (4,5)
            (6, Side::First), // (5,6)
        ]
        .iter()
        {
            board.drop(column, side)?;
        }
        assert_eq!(referee::evaluate(&board), Outcome::Win(Side::First));
        Ok(())
    }

    #[test]
    pub fn minor_diagonal_win_at_grid_corner() -> Result<()> {
        // the shortest minor diagonal, (0,3) down to (3,0), exactly four
        // cells long; exercises the diagonal seeding at the grid edge
        let mut board = Board::new();
        for &(column, side) in [
            (0, Side::First),
            (0, Side::Second),
            (0, Side::First), // (3,0)
            (1, Side::Second),
            (1, Side::First),
            (1, Side::Second),
            (1, Side::First), // (2,1)
            (2, Side::Second),
            (2, Side::First),
            (2, Side::Second),
            (2, Side::First),
            (2, Side::First), // (1,2)
            (3, Side::Second),
            (3, Side::First),
            (3, Side::Second),
            (3, Side::First),
            (3, Side::Second),
            (3, Side::First), // (0,3)
        ]
        .iter()
        {
            board.drop(column, side)?;
        }
        assert_eq!(referee::evaluate(&board), Outcome::Win(Side::First));
        Ok(())
    }

    #[test]
    pub fn full_board_draw() -> Result<()> {
        // row colour pattern chosen so no orientation ever reaches a run
        // of four: colour(row, column) = (column + shift[row]) % 2
        let shift = [0, 0, 1, 1, 0, 0];
        let mut board = Board::new();
        for column in 0..WIDTH {
            for row in (0..crate::HEIGHT).rev() {
                let side = if (column + shift[row]) % 2 == 0 {
                    Side::First
                } else {
                    Side::Second
                };
                board.drop(column, side)?;
            }
        }
        assert!(board.is_full());
        assert_eq!(referee::evaluate(&board), Outcome::Draw);
        Ok(())
    }

    #[test]
    pub fn drop_undo_round_trip() -> Result<()> {
        let mut board = Board::from_moves("4453")?;
        let before = board.clone();

        let row = board.drop(4, Side::First)?;
        assert_ne!(board, before);
        board.undo(row, 4);
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    pub fn column_full_rejection() -> Result<()> {
        let mut board = Board::from_moves("111111")?;
        let before = board.clone();

        assert_eq!(board.drop(0, Side::First), Err(ColumnFull(0)));
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    pub fn invalid_move_strings() {
        assert!(Board::from_moves("8").is_err());
        assert!(Board::from_moves("x").is_err());
        assert!(Board::from_moves("1111111").is_err());
    }

    #[test]
    pub fn opening_move_is_centre() {
        for &side in [Side::First, Side::Second].iter() {
            let mut solver = Solver::new(Board::new());
            assert_eq!(solver.best_move(side), 3);

            let mut solver = Solver::new(Board::new());
            assert_eq!(solver.solve_parallel(side).1, 3);
        }
    }

    #[test]
    pub fn finds_open_ended_win() -> Result<()> {
        // First has three in a row with both ends open; either end wins,
        // and the ascending tie-break picks the lower column
        let mut board = Board::new();
        board.drop(1, Side::First)?;
        board.drop(2, Side::First)?;
        board.drop(3, Side::First)?;
        board.drop(5, Side::Second)?;
        board.drop(5, Side::Second)?;
        board.drop(6, Side::Second)?;

        let mut solver = Solver::new(board);
        assert_eq!(solver.solve(Side::First), (WIN_SCORE - 1, 0));
        Ok(())
    }

    #[test]
    pub fn blocks_opponent_win() -> Result<()> {
        // Second threatens to complete (5,0)..(5,2) at column 3; every
        // other reply loses two plies later
        let mut board = Board::new();
        board.drop(0, Side::Second)?;
        board.drop(1, Side::Second)?;
        board.drop(2, Side::Second)?;
        board.drop(0, Side::First)?;
        board.drop(1, Side::First)?;

        let mut solver = Solver::new(board);
        assert_eq!(solver.best_move(Side::First), 3);
        Ok(())
    }

    #[test]
    pub fn search_is_deterministic() -> Result<()> {
        let board = Board::from_moves("44536")?;

        let first = Solver::new(board.clone()).solve(Side::Second);
        let second = Solver::new(board.clone()).solve(Side::Second);
        assert_eq!(first, second);

        let parallel = Solver::new(board).solve_parallel(Side::Second);
        assert_eq!(first, parallel);
        Ok(())
    }

    #[test]
    pub fn pruned_score_matches_full_minimax() -> Result<()> {
        for moves in ["4453", "112233", "44523"].iter() {
            let board = Board::from_moves(moves)?;
            // the side to move after an even number of moves is First
            let side = if moves.len() % 2 == 0 {
                Side::First
            } else {
                Side::Second
            };

            let reference = minimax_unpruned(&mut board.clone(), side, true, 0);
            let (score, _) = Solver::new(board).solve(side);
            assert_eq!(score, reference);
        }
        Ok(())
    }

    #[test]
    pub fn window_weights() -> Result<()> {
        // three on the bottom row: one 3+1 window (+6) and one 2+2
        // window (+3) for the owner, one threat window (-2) against
        let mut board = Board::new();
        board.drop(0, Side::First)?;
        board.drop(1, Side::First)?;
        board.drop(2, Side::First)?;

        assert_eq!(eval::score(&board, Side::First), 9);
        assert_eq!(eval::score(&board, Side::Second), -2);
        Ok(())
    }

    #[test]
    pub fn centre_column_weighting() -> Result<()> {
        // a three-tile stack in the centre column scores through vertical
        // windows only, each multiplied by the centre weight
        let mut board = Board::new();
        board.drop(3, Side::First)?;
        board.drop(3, Side::First)?;
        board.drop(3, Side::First)?;

        assert_eq!(eval::score(&board, Side::First), 27);
        assert_eq!(eval::score(&board, Side::Second), -6);
        Ok(())
    }
}
