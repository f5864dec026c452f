//! The 4x4 tile grid and the slide/merge transition.
//!
//! Cells hold 0 (empty) or a power of two. The grid is a plain array and
//! never allocates, so it works the same with or without `std`.

use core::fmt;
use core::ops::Index;
use rand::Rng;

use crate::common::GridError;
use crate::config::{is_valid_tile, FOUR_PROBABILITY, GRID_SIZE};
use crate::direction::Direction;

/// One row or column, ordered in the direction of travel.
pub type Line = [u32; GRID_SIZE];

/// Cell values in row-major order.
pub type Cells = [[u32; GRID_SIZE]; GRID_SIZE];

/// Slide a line towards index 0, merging equal neighbours once.
///
/// Zeros are dropped, then the remaining tiles are scanned left to right; a
/// tile equal to the next one is replaced by their sum and the next one is
/// consumed, so a merged tile never merges again in the same pass. The
/// result is padded with zeros on the right.
///
/// ```
/// use twenty48::slide_and_merge;
/// assert_eq!(slide_and_merge([2, 2, 2, 2]), [4, 4, 0, 0]);
/// assert_eq!(slide_and_merge([0, 2, 2, 0]), [4, 0, 0, 0]);
/// ```
pub fn slide_and_merge(line: Line) -> Line {
    let mut out = [0u32; GRID_SIZE];
    let mut len = 0;
    let mut pending: Option<u32> = None;
    for &value in line.iter().filter(|&&v| v != 0) {
        match pending {
            Some(prev) if prev == value => {
                out[len] = prev * 2;
                len += 1;
                pending = None;
            }
            Some(prev) => {
                out[len] = prev;
                len += 1;
                pending = Some(value);
            }
            None => pending = Some(value),
        }
    }
    if let Some(prev) = pending {
        out[len] = prev;
    }
    out
}

/// Grid coordinate of position `i` along line `idx` when moving in `dir`.
///
/// Right and Down walk their lines backwards, which is how a single
/// left-sliding transform serves all four directions.
#[inline]
fn line_coord(dir: Direction, idx: usize, i: usize) -> (usize, usize) {
    let last = GRID_SIZE - 1;
    match dir {
        Direction::Left => (idx, i),
        Direction::Right => (idx, last - i),
        Direction::Up => (i, idx),
        Direction::Down => (last - i, idx),
    }
}

/// Square grid of tile values.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    /// A grid with every cell empty.
    pub const EMPTY: Grid = Grid {
        cells: [[0; GRID_SIZE]; GRID_SIZE],
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Build a grid from row-major values, rejecting anything that is not a
    /// valid tile.
    pub fn from_rows(rows: Cells) -> Result<Self, GridError> {
        for (row, line) in rows.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
        }
        Ok(Grid { cells: rows })
    }

    /// Copy of the cell values in row-major order.
    pub fn rows(&self) -> Cells {
        self.cells
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<u32, GridError> {
        check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrite the value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), GridError> {
        check_bounds(row, col)?;
        if !is_valid_tile(value) {
            return Err(GridError::InvalidTile { row, col, value });
        }
        self.cells[row][col] = value;
        Ok(())
    }

    /// Line `idx` read in the direction of travel for `dir`.
    pub fn line(&self, dir: Direction, idx: usize) -> Line {
        core::array::from_fn(|i| {
            let (r, c) = line_coord(dir, idx, i);
            self.cells[r][c]
        })
    }

    fn write_line(&mut self, dir: Direction, idx: usize, line: Line) {
        for (i, &value) in line.iter().enumerate() {
            let (r, c) = line_coord(dir, idx, i);
            self.cells[r][c] = value;
        }
    }

    /// Slide and merge every line towards `dir`, in place.
    ///
    /// Returns `true` if at least one line changed. A `false` result leaves
    /// the grid untouched.
    pub fn shift(&mut self, dir: Direction) -> bool {
        let mut moved = false;
        for idx in 0..GRID_SIZE {
            let before = self.line(dir, idx);
            let after = slide_and_merge(before);
            if after != before {
                self.write_line(dir, idx, after);
                moved = true;
            }
        }
        moved
    }

    /// The grid that results from shifting towards `dir`, without touching
    /// `self`.
    pub fn shifted(&self, dir: Direction) -> Grid {
        let mut next = *self;
        next.shift(dir);
        next
    }

    /// Whether shifting towards `dir` would change anything.
    pub fn can_shift(&self, dir: Direction) -> bool {
        (0..GRID_SIZE).any(|idx| {
            let line = self.line(dir, idx);
            slide_and_merge(line) != line
        })
    }

    /// Coordinates of all empty cells, row-major.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .filter(move |&(r, c)| self.cells[r][c] == 0)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.count_empty() == GRID_SIZE * GRID_SIZE
    }

    /// Highest tile on the grid, 0 when empty.
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Number of orthogonally adjacent pairs of equal, non-empty tiles.
    pub fn merge_pairs(&self) -> usize {
        let mut pairs = 0;
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let v = self.cells[r][c];
                if v == 0 {
                    continue;
                }
                if c + 1 < GRID_SIZE && self.cells[r][c + 1] == v {
                    pairs += 1;
                }
                if r + 1 < GRID_SIZE && self.cells[r + 1][c] == v {
                    pairs += 1;
                }
            }
        }
        pairs
    }

    /// Returns `true` if any tile has an equal orthogonal neighbour.
    pub fn has_merge_available(&self) -> bool {
        self.merge_pairs() > 0
    }

    /// Place a 2 (90%) or 4 (10%) on an empty cell chosen uniformly at
    /// random.
    ///
    /// Returns the `(row, col, value)` placed, or `None` when the grid is
    /// full, in which case nothing changes.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize, u32)> {
        let empty = self.count_empty();
        if empty == 0 {
            return None;
        }
        let pick = rng.random_range(0..empty);
        let (r, c) = self.empty_cells().nth(pick)?;
        let value = if rng.random_bool(FOUR_PROBABILITY) { 4 } else { 2 };
        self.cells[r][c] = value;
        Some((r, c, value))
    }
}

#[inline]
fn check_bounds(row: usize, col: usize) -> Result<(), GridError> {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        Err(GridError::IndexOutOfBounds { row, col })
    } else {
        Ok(())
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = u32;

    fn index(&self, (row, col): (usize, usize)) -> &u32 {
        &self.cells[row][col]
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid{:?}", self.cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if v == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", v)?;
                }
            }
        }
        Ok(())
    }
}
