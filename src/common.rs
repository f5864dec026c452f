//! Common types for the engine: grid errors and parse errors.

/// Errors returned when building or editing a grid from outside data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is out of bounds [0..GRID_SIZE).
    IndexOutOfBounds { row: usize, col: usize },
    /// Value is neither 0 nor a power of two in the tile range.
    InvalidTile { row: usize, col: usize, value: u32 },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::IndexOutOfBounds { row, col } => {
                write!(f, "IndexOutOfBounds: row={}, col={}", row, col)
            }
            GridError::InvalidTile { row, col, value } => {
                write!(f, "Invalid tile {} at row={}, col={}", value, row, col)
            }
        }
    }
}

/// Error returned when a string names no direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDirectionError;

impl core::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "expected one of left, right, up, down (or an arrow/WASD key)")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

#[cfg(feature = "std")]
impl std::error::Error for ParseDirectionError {}
