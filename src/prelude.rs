//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Direction, GameEngine, GameStatus, Grid, MoveOutcome, Player, PlayerAction};

#[cfg(feature = "std")]
pub use crate::{init_logging, ui::print_game_view, CliPlayer, Session, SessionSummary};
