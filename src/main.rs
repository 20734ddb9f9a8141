use anyhow::Result;

use std::io::{stdin, stdout, Write};
use std::str::FromStr;

use fourline_ai::{Difficulty, Engine, Level, COLS};

mod game;
use game::{Game, Outcome};

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Fourline\n");

    let mut game = Game::new();
    let mut engine = Engine::new(Game::ENGINE, prompt_difficulty()?);

    // game loop
    loop {
        game.display()?;

        match game.outcome() {
            Outcome::Playing => {
                if game.current() == Game::HUMAN {
                    print!("Column 1-{}, (u)ndo or (q)uit > ", COLS);
                    stdout().flush()?;

                    let mut buffer = String::new();
                    stdin.read_line(&mut buffer)?;
                    let input = buffer.trim();

                    match input {
                        "u" => game.undo(),
                        "q" => break,
                        _ => match input.parse::<usize>() {
                            Ok(column) if column >= 1 && column <= COLS => {
                                if !game.play(column - 1)? {
                                    println!("Column {} is full", column);
                                }
                            }
                            _ => println!("Invalid column: {}", input),
                        },
                    }
                } else {
                    println!("Engine is thinking...");
                    stdout().flush()?;

                    let column = engine.choose_move(game.board_mut())?;
                    game.play(column)?;
                }
            }

            // end states
            Outcome::HumanWin => {
                println!("You win!");
                if !next_round(&mut game, &mut engine)? {
                    break;
                }
            }
            Outcome::EngineWin => {
                println!("Engine wins!");
                if !next_round(&mut game, &mut engine)? {
                    break;
                }
            }
            Outcome::Draw => {
                println!("Draw!");
                if !next_round(&mut game, &mut engine)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn prompt_difficulty() -> Result<Difficulty> {
    let stdin = stdin();
    loop {
        print!("Difficulty (easy/medium/hard) [medium]: ");
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;
        let choice = buffer.trim();

        if choice.is_empty() {
            return Ok(Difficulty::default());
        }
        match Level::from_str(choice) {
            Ok(level) => return Ok(Difficulty::from_level(level)),
            Err(_) => println!("Unknown difficulty: {}", choice),
        }
    }
}

fn next_round(game: &mut Game, engine: &mut Engine) -> Result<bool> {
    println!(
        "Score: you {}, engine {}",
        game.human_score, game.engine_score
    );

    let stdin = stdin();
    loop {
        print!("Play again? y/n: ");
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some('y') => {
                engine.set_difficulty(prompt_difficulty()?);
                game.reset();
                return Ok(true);
            }
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
