//! Move directions and the key aliases that select them.

use core::fmt;
use core::str::FromStr;

use crate::common::ParseDirectionError;

/// A direction to slide and merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Map a physical key to a direction.
    ///
    /// Accepts browser-style key names (`ArrowLeft`, ...), the WASD aliases in
    /// either case, and the `ESC [ A..D` sequences a terminal emits for the
    /// arrow keys. Returns `None` for anything else.
    pub fn from_key(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" | "a" | "A" | "\u{1b}[D" | "\u{1b}OD" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" | "\u{1b}[C" | "\u{1b}OC" => Some(Direction::Right),
            "ArrowUp" | "w" | "W" | "\u{1b}[A" | "\u{1b}OA" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" | "\u{1b}[B" | "\u{1b}OB" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Whether the move runs along rows (`Left`/`Right`) rather than columns.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(dir) = Direction::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(s))
        {
            return Ok(dir);
        }
        Direction::from_key(s).ok_or(ParseDirectionError)
    }
}
