use anyhow::Result;

use std::io::{stdin, stdout, Write};

use connect4_board::game::{GameSession, Status};
use connect4_board::COLS;

fn main() -> Result<()> {
    let mut session = GameSession::new();

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        session.board().display().expect("Failed to draw board!");

        match session.status() {
            Status::InProgress => {
                print!("Player {}'s turn > ", session.active_player());
                stdout().flush().expect("failed to flush to stdout!");

                let mut input_str = String::new();
                stdin.read_line(&mut input_str)?;

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column) if column >= 1 => column - 1,
                    _ => {
                        println!(
                            "Invalid input: '{}'. Columns must be between 1 and {}",
                            input_str.trim(),
                            COLS
                        );
                        continue;
                    }
                };

                if let Err(err) = session.try_move(column) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end state
            Status::Won(player) => {
                println!("Player {} wins!", player);
                break;
            }
        }
    }
    Ok(())
}
