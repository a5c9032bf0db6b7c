use anyhow::{anyhow, Result};
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect_four_ai::board::{Board, Cell, Side};
use connect_four_ai::referee::{self, Outcome};
use connect_four_ai::{HEIGHT, WIDTH};

/// One game owned by the driving loop: the live board, the side to move
/// and the outcome after the last applied move. The engine itself holds
/// no state between moves.
pub struct Session {
    pub board: Board,
    pub to_move: Side,
    pub outcome: Outcome,
}

impl Session {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Side::First,
            outcome: Outcome::InProgress,
        }
    }

    /// Validates and applies a 1-indexed column input for the side to move
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<Outcome> {
        if column_one_indexed < 1 || column_one_indexed > WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column_one_indexed,
                WIDTH
            ));
        }
        let column = column_one_indexed - 1;
        self.board
            .drop(column, self.to_move)
            .map_err(|_| anyhow!("Invalid move, column {} full", column_one_indexed))?;

        self.to_move = self.to_move.opponent();
        self.outcome = referee::evaluate(&self.board);
        Ok(self.outcome)
    }

    pub fn display(&self) -> Result<()> {
        let mut stdout = stdout();

        let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        stdout.queue(PrintStyledContent(style(cols + "\n")))?;
        for _ in 0..HEIGHT {
            stdout.queue(PrintStyledContent(style("\n")))?;
        }
        stdout.flush()?;

        let (origin_x, origin_y) = crossterm::cursor::position()?;

        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                let (pos_x, pos_y) = (
                    origin_x + column as u16,
                    origin_y - (HEIGHT - 1 - row) as u16,
                );

                stdout
                    .queue(MoveTo(pos_x, pos_y))?
                    .queue(PrintStyledContent(
                        style("O")
                            .attribute(Attribute::Bold)
                            .on(Color::DarkBlue)
                            .with(match self.board.cell(row, column) {
                                Cell::Taken(Side::First) => Color::Red,
                                Cell::Taken(Side::Second) => Color::Yellow,
                                Cell::Empty => Color::DarkBlue,
                            }),
                    ))?;
            }
        }
        stdout
            .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
            .queue(PrintStyledContent(style("\n")))?;
        stdout.flush()?;
        Ok(())
    }
}
