use rand::rngs::SmallRng;

use crate::{
    config::GRID_SIZE,
    direction::Direction,
    game::{GameEngine, GameStatus},
    grid::Grid,
    player::{Player, PlayerAction},
};

const EMPTY_WEIGHT: i64 = 1_000;
const MERGE_WEIGHT: i64 = 200;

/// Greedy one-ply player: tries every direction and keeps the grid with the
/// most room, the most merges lined up and the highest tile in a corner.
pub struct AiPlayer {
    restarts_left: u32,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self { restarts_left: 0 }
    }

    /// Player that starts over after a finished game, `restarts` times.
    pub fn with_restarts(restarts: u32) -> Self {
        Self {
            restarts_left: restarts,
        }
    }

    /// Best direction for `grid`, or `None` if no direction changes it.
    /// Ties go to the earlier entry of [`Direction::ALL`].
    pub fn best_move(grid: &Grid) -> Option<Direction> {
        let mut best: Option<(Direction, i64)> = None;
        for dir in Direction::ALL {
            let next = grid.shifted(dir);
            if next == *grid {
                continue;
            }
            let score = evaluate(&next);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((dir, score));
            }
        }
        best.map(|(dir, _)| dir)
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn evaluate(grid: &Grid) -> i64 {
    let last = GRID_SIZE - 1;
    let highest = grid.highest_tile();
    let cornered = [(0, 0), (0, last), (last, 0), (last, last)]
        .iter()
        .any(|&pos| grid[pos] == highest);
    let corner_bonus = if cornered { highest as i64 } else { 0 };
    grid.count_empty() as i64 * EMPTY_WEIGHT + grid.merge_pairs() as i64 * MERGE_WEIGHT + corner_bonus
}

impl Player for AiPlayer {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        engine: &GameEngine,
    ) -> anyhow::Result<PlayerAction> {
        Ok(match AiPlayer::best_move(engine.grid()) {
            Some(dir) => PlayerAction::Move(dir),
            None => PlayerAction::Quit,
        })
    }

    fn confirm_restart(&mut self, _status: GameStatus, _engine: &GameEngine) -> anyhow::Result<bool> {
        if self.restarts_left == 0 {
            return Ok(false);
        }
        self.restarts_left -= 1;
        Ok(true)
    }
}
