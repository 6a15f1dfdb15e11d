//! Game session: the move/spawn/check cycle as an explicit state machine.
//!
//! A [`Session`] owns the current [`Grid`] and the random source. Each
//! [`Command`] either quits or attempts a move; an accepted move (one that
//! changes the grid) is followed by exactly one spawn, then the grid is
//! checked for a win and then for a loss. Nothing here does I/O.
//!
//! ```
//! use slide_2048::engine::Move;
//! use slide_2048::session::{Command, GameState, Session};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut session = Session::new(StdRng::seed_from_u64(42));
//! assert_eq!(session.state(), GameState::Playing);
//! let outcome = session.step(Command::Move(Move::Left)).unwrap();
//! assert_eq!(outcome.state, GameState::Playing);
//! assert_eq!(session.step(Command::Quit).unwrap().state, GameState::Quit);
//! assert!(session.step(Command::Quit).is_err());
//! ```

use std::str::FromStr;

use log::{debug, info};
use rand::Rng;

use crate::engine::{self, Grid, Move};

/// Where a session stands: still playing, or one of the terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    Won,
    Lost,
    Quit,
}

impl GameState {
    /// True for every state except `Playing`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Playing)
    }

    /// Won if the target tile is present, else Lost if nothing can move.
    pub fn of(grid: Grid) -> Self {
        if grid.has_reached_target() {
            GameState::Won
        } else if !grid.has_legal_move() {
            GameState::Lost
        } else {
            GameState::Playing
        }
    }
}

/// One player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Move),
    Quit,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("unrecognized command {0:?}; expected one of w, a, s, d, q")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse a single WASD/Q token, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" => Ok(Command::Move(Move::Up)),
            "a" => Ok(Command::Move(Move::Left)),
            "s" => Ok(Command::Move(Move::Down)),
            "d" => Ok(Command::Move(Move::Right)),
            "q" => Ok(Command::Quit),
            _ => Err(ParseCommandError(s.trim().to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("session already finished ({0:?})")]
    Finished(GameState),
}

/// Result of a single [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepOutcome {
    /// Whether the move changed the grid (and so spawned a tile).
    pub changed: bool,
    pub state: GameState,
}

/// One game: the current grid, its random source, and the state machine.
#[derive(Debug, Clone)]
pub struct Session<R> {
    grid: Grid,
    rng: R,
    state: GameState,
    moves: u64,
    spawned: u64,
}

impl<R: Rng> Session<R> {
    /// Start a fresh game with two spawned tiles.
    pub fn new(mut rng: R) -> Self {
        let grid = engine::new_game(&mut rng);
        let mut session = Self::with_grid(grid, rng);
        session.spawned = 2;
        session
    }

    /// Resume from an existing grid. The state is evaluated immediately.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        let state = GameState::of(grid);
        Session { grid, rng, state, moves: 0, spawned: 0 }
    }

    /// The current grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Number of accepted (grid-changing) moves.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Number of tiles spawned, including the two starting tiles.
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Apply one command and advance the state machine.
    ///
    /// A move that leaves the grid unchanged is not an error: it returns
    /// `changed: false` and spawns nothing.
    pub fn step(&mut self, command: Command) -> Result<StepOutcome, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::Finished(self.state));
        }
        let dir = match command {
            Command::Quit => {
                info!("quit after {} move(s), highest tile {}", self.moves, self.grid.highest_tile());
                self.state = GameState::Quit;
                return Ok(StepOutcome { changed: false, state: self.state });
            }
            Command::Move(dir) => dir,
        };

        let before = self.grid;
        let moved = engine::apply_move(before, dir);
        let changed = !engine::boards_equal(&before, &moved);
        if changed {
            self.grid = engine::spawn_tile(moved, &mut self.rng);
            self.moves += 1;
            self.spawned += 1;
            debug!("move {:?} accepted ({} empty after spawn)", dir, self.grid.count_empty());
        } else {
            debug!("move {:?} left the grid unchanged", dir);
        }

        self.state = GameState::of(self.grid);
        match self.state {
            GameState::Won => info!("reached {} after {} move(s)", engine::TARGET_TILE, self.moves),
            GameState::Lost => info!("no legal move after {} move(s), highest tile {}", self.moves, self.grid.highest_tile()),
            _ => {}
        }
        Ok(StepOutcome { changed, state: self.state })
    }
}
