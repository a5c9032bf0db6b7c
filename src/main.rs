use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect_four_ai::board::Side;
use connect_four_ai::referee::Outcome;
use connect_four_ai::solver::{Solver, DEPTH_LIMIT, WIN_SCORE};

mod session;
use session::Session;

fn player_number(side: Side) -> usize {
    match side {
        Side::First => 1,
        Side::Second => 2,
    }
}

fn main() -> Result<()> {
    let mut session = Session::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    loop {
        session.display().expect("Failed to draw board!");

        match session.outcome {
            Outcome::InProgress => {
                let to_move = session.to_move;
                let ai_turn = (to_move == Side::First && ai_players.0)
                    || (to_move == Side::Second && ai_players.1);

                let next_move = if ai_turn {
                    println!("AI is thinking...");
                    stdout().flush().expect("Failed to flush to stdout!");

                    // slow down play if both players are AI
                    if ai_players == (true, true) {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let mut solver = Solver::new(session.board.clone());
                    let (score, best_move) = solver.solve(to_move);

                    if score >= WIN_SCORE - DEPTH_LIMIT as i32 {
                        println!(
                            "Player {} can force a win within {} moves.",
                            player_number(to_move),
                            WIN_SCORE - score
                        );
                    } else if score <= DEPTH_LIMIT as i32 - WIN_SCORE {
                        println!(
                            "Player {} cannot avoid losing within {} moves.",
                            player_number(to_move),
                            score + WIN_SCORE
                        );
                    }

                    println!("Best move: {}", best_move + 1);
                    best_move + 1

                // human player
                } else {
                    print!("Move input > ");
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str);
                            continue;
                        }
                        Ok(column) => column,
                    }
                };

                if let Err(err) = session.play_checked(next_move) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            Outcome::Win(winner) => {
                println!("Player {} wins!", player_number(winner));
                break;
            }
            Outcome::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
