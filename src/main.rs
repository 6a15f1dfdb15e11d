use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use slide_2048::engine::Grid;
use slide_2048::session::{Command, GameState, Session};

#[derive(Debug, Parser)]
#[command(author, version, about = "Play 2048 in the terminal")]
struct Args {
    /// Seed for a reproducible game (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Do not clear the terminal between moves
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    debug!("starting game (seed: {:?})", args.seed);
    let mut session = Session::new(rng);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout().lock();
    run(&mut session, &mut input, &mut stdout, !args.no_clear)?;
    Ok(())
}

/// Drive a session from line-based input until it reaches a terminal state.
fn run<R: Rng>(
    session: &mut Session<R>,
    input: &mut impl BufRead,
    out: &mut impl Write,
    clear: bool,
) -> Result<GameState> {
    let mut line = String::new();
    loop {
        render(out, session.grid(), clear)?;
        match session.state() {
            GameState::Won => {
                writeln!(out, "You reached 2048! You win!")?;
                return Ok(GameState::Won);
            }
            GameState::Lost => {
                writeln!(out, "No more moves! Game over.")?;
                return Ok(GameState::Lost);
            }
            GameState::Quit => {
                writeln!(out, "Thanks for playing!")?;
                return Ok(GameState::Quit);
            }
            GameState::Playing => {}
        }

        write!(out, "Move (W/A/S/D): ")?;
        out.flush().context("failed to flush stdout")?;
        line.clear();
        let read = input.read_line(&mut line).context("failed to read from stdin")?;
        let command = if read == 0 {
            Command::Quit
        } else {
            match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    // Redraw and prompt again.
                    debug!("{e}");
                    continue;
                }
            }
        };
        session.step(command)?;
    }
}

fn render(out: &mut impl Write, grid: Grid, clear: bool) -> Result<()> {
    if clear {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    writeln!(out, "\n2048 GAME\n")?;
    writeln!(out, "{grid}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn frames(out: &[u8]) -> usize {
        String::from_utf8_lossy(out).matches("2048 GAME").count()
    }

    #[test]
    fn it_redraws_after_unknown_token() {
        let mut session = Session::new(StdRng::seed_from_u64(3));
        let mut input = Cursor::new("x\nq\n");
        let mut out = Vec::new();
        let state = run(&mut session, &mut input, &mut out, false).unwrap();
        assert_eq!(state, GameState::Quit);
        // Start, after "x", after "q".
        assert_eq!(frames(&out), 3);
        assert!(String::from_utf8_lossy(&out).ends_with("Thanks for playing!\n"));
    }

    #[test]
    fn it_quits_on_eof() {
        let mut session = Session::new(StdRng::seed_from_u64(4));
        let mut out = Vec::new();
        let state = run(&mut session, &mut Cursor::new(""), &mut out, true).unwrap();
        assert_eq!(state, GameState::Quit);
        assert!(String::from_utf8_lossy(&out).starts_with("\x1b[2J\x1b[H"));
    }
}
