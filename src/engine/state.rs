use rand::Rng;
use std::fmt;

use super::ops;

/// Side length of the square grid.
pub const SIZE: usize = 4;

/// Reaching this tile wins the game.
pub const TARGET_TILE: Tile = 2048;

/// A single cell value: 0 is empty, otherwise a power of two >= 2.
pub type Tile = u32;

/// Largest tile accepted when building a grid. Every sum reachable by
/// merging tiles at or below it stays far inside `Tile`.
pub const MAX_TILE: Tile = 1 << 17;

/// The rows of a grid, row-major.
pub type Rows = [[Tile; SIZE]; SIZE];

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every direction.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GridError {
    #[error("tile {value} at ({row}, {col}) is not a power of two")]
    NotPowerOfTwo { row: usize, col: usize, value: Tile },
    #[error("tile {value} at ({row}, {col}) exceeds the largest reachable tile {max}")]
    TooLarge { row: usize, col: usize, value: Tile, max: Tile },
    #[error("expected a {expected}x{expected} grid, got {rows} row(s) with a row of length {cols}")]
    Dimensions { expected: usize, rows: usize, cols: usize },
}

/// The 4x4 tile matrix, stored row-major.
///
/// `Grid` is a plain value: every move returns a fresh grid and the
/// input is never touched, so "did the move change anything" is simply
/// `before != after`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid(pub(crate) Rows);

impl Grid {
    /// A constant empty grid (all zeros).
    pub const EMPTY: Grid = Grid([[0; SIZE]; SIZE]);

    /// Build a grid from rows, panicking if any positive tile is not a power
    /// of two or is above [`MAX_TILE`].
    ///
    /// Malformed rows are a caller bug, so this fails fast. Use
    /// [`Grid::try_from_rows`] to get the error instead.
    ///
    /// ```
    /// use slide_2048::engine::Grid;
    /// let g = Grid::from_rows([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
    /// assert_eq!(g.tile(0, 1), 2);
    /// ```
    pub fn from_rows(rows: Rows) -> Self {
        match Self::try_from_rows(rows) {
            Ok(grid) => grid,
            Err(e) => panic!("malformed grid: {e}"),
        }
    }

    /// Build a grid from rows, validating every tile.
    pub fn try_from_rows(rows: Rows) -> Result<Self, GridError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(GridError::NotPowerOfTwo { row, col, value });
                }
                if value > MAX_TILE {
                    return Err(GridError::TooLarge { row, col, value, max: MAX_TILE });
                }
            }
        }
        Ok(Grid(rows))
    }

    /// Borrow the rows of this grid.
    #[inline]
    pub fn rows(&self) -> &Rows {
        &self.0
    }

    /// Value at (`row`, `col`). Panics when out of bounds.
    #[inline]
    pub fn tile(&self, row: usize, col: usize) -> Tile {
        self.0[row][col]
    }

    /// Return the grid resulting from sliding/merging tiles in `dir` (no random insert).
    ///
    /// ```
    /// use slide_2048::engine::{Grid, Move};
    /// let g = Grid::from_rows([[0, 2, 0, 2], [0; 4], [0; 4], [0; 4]]);
    /// assert_eq!(g.shift(Move::Left).rows()[0], [4, 0, 0, 0]);
    /// ```
    #[inline]
    pub fn shift(self, dir: Move) -> Self {
        ops::shift(self, dir)
    }

    /// Insert a random 2 (90%) or 4 (10%) tile into a uniformly chosen empty cell.
    ///
    /// A full grid is returned unchanged.
    ///
    /// ```
    /// use slide_2048::engine::Grid;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let g = Grid::EMPTY.with_random_tile(&mut rng).with_random_tile(&mut rng);
    /// assert_eq!(g.count_empty(), 14);
    /// ```
    pub fn with_random_tile<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return self;
        }
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        let mut rows = self.0;
        rows[row][col] = generate_random_tile(rng);
        Grid(rows)
    }

    /// Perform a move, then insert a random tile if the move changed the grid.
    ///
    /// ```
    /// use slide_2048::engine::{Grid, Move};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let g0 = Grid::from_rows([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    /// assert_eq!(g0.make_move(Move::Left, &mut rng), g0);
    /// assert_eq!(g0.make_move(Move::Right, &mut rng).count_empty(), 14);
    /// ```
    pub fn make_move<R: Rng + ?Sized>(self, dir: Move, rng: &mut R) -> Self {
        let moved = self.shift(dir);
        if moved != self {
            moved.with_random_tile(rng)
        } else {
            self
        }
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for (r, line) in self.0.iter().enumerate() {
            for (c, &value) in line.iter().enumerate() {
                if value == 0 {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// True if at least one direction would change the grid.
    #[inline]
    pub fn has_legal_move(self) -> bool {
        ops::has_legal_move(self)
    }

    /// True if the target tile (2048) is on the grid.
    #[inline]
    pub fn has_reached_target(self) -> bool {
        ops::has_reached_target(self)
    }

    /// Count the number of empty cells.
    #[inline]
    pub fn count_empty(self) -> usize {
        ops::count_empty(self)
    }

    /// Return the highest tile value present (0 for an empty grid).
    #[inline]
    pub fn highest_tile(self) -> Tile {
        ops::highest_tile(self)
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        if rows.len() != SIZE {
            let cols = rows.first().map_or(0, Vec::len);
            return Err(GridError::Dimensions { expected: SIZE, rows: rows.len(), cols });
        }
        let mut out = [[0; SIZE]; SIZE];
        for (r, line) in rows.iter().enumerate() {
            if line.len() != SIZE {
                return Err(GridError::Dimensions { expected: SIZE, rows: rows.len(), cols: line.len() });
            }
            out[r].copy_from_slice(line);
        }
        Grid::try_from_rows(out)
    }
}

impl From<Grid> for Rows {
    fn from(g: Grid) -> Self {
        g.0
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.0)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = format!("{}+", "+------".repeat(SIZE));
        for line in &self.0 {
            writeln!(f, "{border}")?;
            for &value in line {
                if value == 0 {
                    write!(f, "|      ")?;
                } else {
                    write!(f, "|{value:^6}")?;
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{border}")
    }
}

/// Start a game: an empty grid with two random tiles.
///
/// ```
/// use slide_2048::engine::new_game;
/// use rand::{SeedableRng, rngs::StdRng};
/// let g = new_game(&mut StdRng::seed_from_u64(7));
/// assert_eq!(g.count_empty(), 14);
/// ```
pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    Grid::EMPTY.with_random_tile(rng).with_random_tile(rng)
}

/// Free-function form of [`Grid::with_random_tile`].
pub fn spawn_tile<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Grid {
    grid.with_random_tile(rng)
}

fn generate_random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_range(0..10) < 9 { 2 } else { 4 }
}
