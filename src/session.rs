#![cfg(feature = "std")]

use std::boxed::Box;

use log::{debug, info, trace};
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::{
    game::{GameEngine, GameStatus},
    player::{Player, PlayerAction},
};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Games started, restarts included.
    pub games: u32,
    pub last_status: GameStatus,
    pub highest_tile: u32,
    /// Successful moves over all games.
    pub moves: u32,
}

/// Event loop feeding one player's input into one engine.
pub struct Session {
    player: Box<dyn Player>,
    engine: GameEngine,
    max_moves: Option<u32>,
}

impl Session {
    pub fn new(player: Box<dyn Player>, engine: GameEngine) -> Self {
        Self {
            player,
            engine,
            max_moves: None,
        }
    }

    /// Stop after `limit` successful moves in total.
    pub fn with_max_moves(mut self, limit: u32) -> Self {
        self.max_moves = Some(limit);
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Play until the player quits, declines a restart, or the move limit
    /// is hit.
    pub fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<SessionSummary> {
        self.engine.start(rng);
        info!("game started:\n{}", self.engine.grid());

        let mut games: u32 = 1;
        let mut total_moves: u32 = 0;
        loop {
            let status = self.engine.status();
            if status.is_terminal() {
                info!(
                    "game {} ended {:?} after {} moves, highest tile {}",
                    games,
                    status,
                    self.engine.moves(),
                    self.engine.highest_tile()
                );
                if !self.player.confirm_restart(status, &self.engine)? {
                    break;
                }
                self.engine.restart(rng);
                games += 1;
                info!("restarted, game {}", games);
                continue;
            }
            if self.max_moves.is_some_and(|limit| total_moves >= limit) {
                info!("move limit of {} reached", total_moves);
                break;
            }

            match self.player.select_move(rng, &self.engine)? {
                PlayerAction::Move(dir) => {
                    let outcome = self.engine.handle_move(dir, rng);
                    if outcome.moved {
                        total_moves += 1;
                        debug!(
                            "move {} {}: highest {}, progress {:.0}%",
                            self.engine.moves(),
                            dir,
                            self.engine.highest_tile(),
                            outcome.progress
                        );
                    } else {
                        debug!("{} left the grid unchanged", dir);
                    }
                    self.player.handle_outcome(dir, &outcome);
                }
                PlayerAction::Ignore => trace!("ignored input"),
                PlayerAction::Quit => {
                    info!("player quit");
                    break;
                }
            }
        }

        Ok(SessionSummary {
            games,
            last_status: self.engine.status(),
            highest_tile: self.engine.highest_tile(),
            moves: total_moves,
        })
    }
}
