use rand::Rng;

use crate::{
    common::GridError,
    config::{PROGRESS_STEPS, START_TILES, WIN_TILE},
    direction::Direction,
    grid::{Cells, Grid},
};

/// Current status of a game, always derived from the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// `Won` and `Lost` absorb all moves until a restart.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// What one processed input did to the game.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveOutcome {
    /// Whether any tile slid or merged. A new tile is spawned only if so.
    pub moved: bool,
    pub status: GameStatus,
    /// Progress towards the winning tile, in percent.
    pub progress: f64,
}

/// Serializable snapshot of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub cells: Cells,
    pub moves: u32,
}

/// Progress percentage for a highest tile `h`.
///
/// Computed as `(log2(h) - 1) / 10 * 100` clamped to `[0, 100]`, so a 2 is
/// 0% and the winning tile is 100%. An empty grid (`h == 0`) is 0%.
pub fn progress_for_tile(highest: u32) -> f64 {
    if highest == 0 {
        return 0.0;
    }
    let steps = libm::log2(highest as f64) - 1.0;
    (steps / PROGRESS_STEPS as f64 * 100.0).clamp(0.0, 100.0)
}

/// Core game logic holding the grid and the move counter.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct GameEngine {
    grid: Grid,
    moves: u32,
}

impl GameEngine {
    /// Create a new engine with an empty grid. Call [`GameEngine::start`] to
    /// seed the starting tiles.
    pub fn new() -> Self {
        Self {
            grid: Grid::EMPTY,
            moves: 0,
        }
    }

    /// Create an engine around an existing grid.
    pub fn with_grid(grid: Grid) -> Self {
        Self { grid, moves: 0 }
    }

    /// Spawn the starting tiles. Does nothing unless the grid is empty.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.grid.is_empty() {
            return;
        }
        for _ in 0..START_TILES {
            self.grid.spawn_tile(rng);
        }
    }

    /// Reset to an empty grid and spawn the starting tiles.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = Grid::EMPTY;
        self.moves = 0;
        self.start(rng);
    }

    /// Apply one move: slide/merge, spawn a tile if anything moved, report.
    ///
    /// Once the game is won or lost, moves are refused (`moved == false`)
    /// until [`GameEngine::restart`].
    pub fn handle_move<R: Rng + ?Sized>(&mut self, dir: Direction, rng: &mut R) -> MoveOutcome {
        let mut moved = false;
        if !self.status().is_terminal() {
            moved = self.grid.shift(dir);
            if moved {
                self.moves += 1;
                self.grid.spawn_tile(rng);
            }
        }
        MoveOutcome {
            moved,
            status: self.status(),
            progress: self.progress(),
        }
    }

    /// Evaluate the current game status. A winning tile takes precedence
    /// over a locked grid.
    pub fn status(&self) -> GameStatus {
        if self.grid.highest_tile() >= WIN_TILE {
            GameStatus::Won
        } else if self.grid.is_full() && !self.grid.has_merge_available() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Progress towards the winning tile, in percent.
    pub fn progress(&self) -> f64 {
        progress_for_tile(self.grid.highest_tile())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Successful moves since the last (re)start.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid.highest_tile()
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            cells: self.grid.rows(),
            moves: self.moves,
        }
    }

    /// Restore an engine from a snapshot, validating every cell.
    pub fn from_state(state: GameState) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::from_rows(state.cells)?,
            moves: state.moves,
        })
    }
}
