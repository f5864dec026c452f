#![cfg(feature = "std")]

use std::boxed::Box;
use std::io::{self, BufRead, Write};
use std::string::String;

use rand::rngs::SmallRng;

use crate::{
    direction::Direction,
    game::{GameEngine, GameStatus, MoveOutcome},
    player::{Player, PlayerAction},
    ui,
};

/// Human player reading one key (or word) per line.
pub struct CliPlayer {
    input: Box<dyn BufRead>,
}

impl CliPlayer {
    /// Player reading from stdin.
    pub fn new() -> Self {
        Self::with_input(Box::new(io::BufReader::new(io::stdin())))
    }

    /// Player reading from any line source, e.g. a scripted `Cursor`.
    pub fn with_input(input: Box<dyn BufRead>) -> Self {
        Self { input }
    }

    /// Next line with the trailing newline removed, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).trim_matches(' ');
        Ok(Some(String::from(trimmed)))
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Interpret one line of input.
pub fn parse_action(input: &str) -> PlayerAction {
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return PlayerAction::Quit;
    }
    match input.parse::<Direction>() {
        Ok(dir) => PlayerAction::Move(dir),
        Err(_) => PlayerAction::Ignore,
    }
}

impl Player for CliPlayer {
    fn select_move(
        &mut self,
        _rng: &mut SmallRng,
        engine: &GameEngine,
    ) -> anyhow::Result<PlayerAction> {
        ui::print_game_view(engine);
        std::print!("Move [w/a/s/d or arrows, q to quit]: ");
        io::stdout().flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(PlayerAction::Quit);
        };
        let action = parse_action(&line);
        if action == PlayerAction::Ignore {
            std::println!("Unrecognized key {:?}", line);
        }
        Ok(action)
    }

    fn handle_outcome(&mut self, direction: Direction, outcome: &MoveOutcome) {
        if !outcome.moved {
            std::println!("Nothing moves {}.", direction);
        }
    }

    fn confirm_restart(&mut self, status: GameStatus, engine: &GameEngine) -> anyhow::Result<bool> {
        ui::print_game_view(engine);
        ui::print_end_banner(status, engine.highest_tile());
        std::print!("Play again? [y/N]: ");
        io::stdout().flush()?;
        Ok(matches!(
            self.read_line()?.as_deref(),
            Some("y") | Some("Y") | Some("yes")
        ))
    }
}
