use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use twenty48_core::engine::{self as GameEngine, GameState, Move};
use twenty48_core::game::Game;
use twenty48_core::theme;

#[derive(Debug, Parser)]
#[command(name = "twenty48", about = "Play 2048 in the terminal")]
struct Args {
    /// Seed the RNG for a reproducible game
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    GameEngine::new();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = Game::new(&mut rng);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "Slide with left/right/up/down (or l/r/u/d), n = new game, q = quit"
    )?;
    print_position(&game, &mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let cmd = line.trim().to_ascii_lowercase();
        if cmd.is_empty() {
            continue;
        }
        match cmd.as_str() {
            "q" | "quit" => break,
            "n" | "new" => {
                game.reset(&mut rng);
                print_position(&game, &mut stdout)?;
            }
            _ => match parse_move(&cmd) {
                Some(direction) if game.state() == GameState::Ongoing => {
                    let result = game.step(direction, &mut rng);
                    // Stay quiet on moves that can't go anywhere.
                    if result.moved {
                        print_position(&game, &mut stdout)?;
                    }
                }
                Some(_) => {
                    // The won/lost label stays up until an explicit restart.
                    writeln!(
                        stdout,
                        "{} (n = new game, q = quit)",
                        theme::score_text(game.state(), game.score())
                    )?;
                }
                None => {
                    writeln!(stdout, "Unknown command: {cmd}")?;
                }
            },
        }
    }
    Ok(())
}

fn parse_move(cmd: &str) -> Option<Move> {
    match cmd {
        "l" | "left" => Some(Move::Left),
        "r" | "right" => Some(Move::Right),
        "u" | "up" => Some(Move::Up),
        "d" | "down" => Some(Move::Down),
        _ => None,
    }
}

fn print_position(game: &Game, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", game.board())?;
    writeln!(
        out,
        "Score: {} | Best: {}",
        theme::score_text(game.state(), game.score()),
        game.best_score()
    )?;
    out.flush()?;
    Ok(())
}
