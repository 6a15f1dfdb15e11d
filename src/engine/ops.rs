use super::state::{Grid, Move, Rows, Tile, MAX_TILE, SIZE, TARGET_TILE};

/// One row (or, after a transpose, one column) of the grid.
pub type Line = [Tile; SIZE];

/// Slide/merge tiles in the given direction. No randomness.
pub fn shift(grid: Grid, direction: Move) -> Grid {
    match direction {
        Move::Left => move_left(grid),
        Move::Right => move_right(grid),
        Move::Up => move_up(grid),
        Move::Down => move_down(grid),
    }
}

/// Alias of [`shift`] under the name the game loop uses.
#[inline]
pub fn apply_move(grid: Grid, direction: Move) -> Grid {
    shift(grid, direction)
}

/// Value equality over every cell.
#[inline]
pub fn boards_equal(a: &Grid, b: &Grid) -> bool {
    a == b
}

/// Reduce every row toward column 0.
pub fn move_left(grid: Grid) -> Grid {
    Grid(grid.0.map(reduce_line))
}

/// Reduce every row toward the last column.
pub fn move_right(grid: Grid) -> Grid {
    Grid(reverse_rows(move_left(Grid(reverse_rows(grid.0))).0))
}

/// Reduce every column toward row 0.
pub fn move_up(grid: Grid) -> Grid {
    transpose(move_left(transpose(grid)))
}

/// Reduce every column toward the last row.
pub fn move_down(grid: Grid) -> Grid {
    transpose(move_right(transpose(grid)))
}

/// Swap rows and columns. Its own inverse.
pub fn transpose(grid: Grid) -> Grid {
    let rows = grid.0;
    Grid(std::array::from_fn(|r| std::array::from_fn(|c| rows[c][r])))
}

fn reverse_rows(mut rows: Rows) -> Rows {
    for line in rows.iter_mut() {
        line.reverse();
    }
    rows
}

/// Slide a line toward index 0 and merge equal neighbours once.
///
/// Tiles must not exceed [`MAX_TILE`]; a merge that would overflow panics.
///
/// Merges are taken left to right in a single pass, so `[2, 2, 2, 2]`
/// becomes `[4, 4, 0, 0]` and a freshly merged tile never merges again.
///
/// ```
/// use slide_2048::engine::reduce_line;
/// assert_eq!(reduce_line([2, 0, 2, 4]), [4, 4, 0, 0]);
/// assert_eq!(reduce_line([2, 2, 2, 2]), [4, 4, 0, 0]);
/// ```
pub fn reduce_line(line: Line) -> Line {
    compress(merge(compress(line)))
}

fn compress(line: Line) -> Line {
    let mut out = [0; SIZE];
    for (slot, value) in out.iter_mut().zip(line.into_iter().filter(|&v| v != 0)) {
        *slot = value;
    }
    out
}

fn merge(mut line: Line) -> Line {
    for i in 0..SIZE - 1 {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] = match line[i].checked_mul(2) {
                Some(v) => v,
                None => panic!("merging {} overflows; tiles must not exceed {}", line[i], MAX_TILE),
            };
            line[i + 1] = 0;
        }
    }
    line
}

/// True if some move would change the grid: an empty cell, or two equal
/// neighbours along a row or a column.
///
/// The all-empty grid also answers true; it never occurs in play since
/// a game starts with two tiles.
pub fn has_legal_move(grid: Grid) -> bool {
    let rows = grid.0;
    if rows.iter().flatten().any(|&v| v == 0) {
        return true;
    }
    for r in 0..SIZE {
        for c in 0..SIZE - 1 {
            if rows[r][c] == rows[r][c + 1] {
                return true;
            }
        }
    }
    for c in 0..SIZE {
        for r in 0..SIZE - 1 {
            if rows[r][c] == rows[r + 1][c] {
                return true;
            }
        }
    }
    false
}

/// True if any cell holds the winning tile.
pub fn has_reached_target(grid: Grid) -> bool {
    grid.0.iter().flatten().any(|&v| v == TARGET_TILE)
}

/// Count the number of empty cells.
pub fn count_empty(grid: Grid) -> usize {
    grid.0.iter().flatten().filter(|&&v| v == 0).count()
}

/// Highest tile value present (0 for an empty grid).
pub fn highest_tile(grid: Grid) -> Tile {
    grid.0.iter().flatten().copied().max().unwrap_or(0)
}
