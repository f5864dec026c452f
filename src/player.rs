use rand::rngs::SmallRng;

use crate::{
    direction::Direction,
    game::{GameEngine, GameStatus, MoveOutcome},
};

/// What a player wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Slide the tiles.
    Move(Direction),
    /// Input that maps to no direction; nothing happens.
    Ignore,
    /// Leave the game.
    Quit,
}

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next action for the current game.
    fn select_move(
        &mut self,
        rng: &mut SmallRng,
        engine: &GameEngine,
    ) -> anyhow::Result<PlayerAction>;

    /// Inform the player of the result of its last move.
    fn handle_outcome(&mut self, _direction: Direction, _outcome: &MoveOutcome) {}

    /// Asked once the game is won or lost. Return `true` to start over.
    fn confirm_restart(&mut self, _status: GameStatus, _engine: &GameEngine) -> anyhow::Result<bool> {
        Ok(false)
    }
}
