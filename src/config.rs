pub const GRID_SIZE: usize = 4;
pub const WIN_TILE: u32 = 2048;
pub const START_TILES: usize = 2;

/// Chance that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;

/// Number of doublings between the smallest tile (2) and the winning tile.
pub const PROGRESS_STEPS: u32 = 10;

/// Largest tile a 4x4 grid can ever hold (2^17).
pub const MAX_TILE: u32 = 1 << 17;

/// Returns `true` when `value` may occupy a cell: 0 (empty) or a power of
/// two between 2 and [`MAX_TILE`].
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || ((2..=MAX_TILE).contains(&value) && value.is_power_of_two())
}
