#![cfg(feature = "std")]

use std::string::String;

use crate::{
    config::{GRID_SIZE, WIN_TILE},
    game::{GameEngine, GameStatus},
    grid::Grid,
};

const CELL_WIDTH: usize = 6;
pub const PROGRESS_BAR_WIDTH: usize = 24;

/// Render the grid as a boxed table, empty cells left blank.
pub fn render_grid(grid: &Grid) -> String {
    let border = {
        let mut line = String::from("+");
        for _ in 0..GRID_SIZE {
            line.push_str(&"-".repeat(CELL_WIDTH));
            line.push('+');
        }
        line
    };
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    for row in grid.rows().iter() {
        out.push('|');
        for &v in row.iter() {
            if v == 0 {
                out.push_str(&" ".repeat(CELL_WIDTH));
            } else {
                out.push_str(&std::format!("{:^width$}", v, width = CELL_WIDTH));
            }
            out.push('|');
        }
        out.push('\n');
        out.push_str(&border);
        out.push('\n');
    }
    out
}

/// Render a progress bar such as `[######------]  50%`.
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let progress = progress.clamp(0.0, 100.0);
    let filled = ((progress / 100.0) * width as f64).round() as usize;
    std::format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        progress
    )
}

/// Title and message shown once a game is over.
pub fn end_message(status: GameStatus, highest: u32) -> Option<(&'static str, String)> {
    match status {
        GameStatus::Won => Some((
            "Pass!",
            std::format!("Congratulations! You reached {}!\nHighest tile: {}", WIN_TILE, highest),
        )),
        GameStatus::Lost => Some((
            "Game Over",
            std::format!("No moves left.\nHighest tile: {}", highest),
        )),
        GameStatus::InProgress => None,
    }
}

/// Display the grid with the progress bar underneath.
pub fn print_game_view(engine: &GameEngine) {
    std::println!();
    std::print!("{}", render_grid(engine.grid()));
    std::println!(
        "Progress {}  moves: {}",
        render_progress_bar(engine.progress(), PROGRESS_BAR_WIDTH),
        engine.moves()
    );
}

/// Print the end-of-game banner, if the game is over.
pub fn print_end_banner(status: GameStatus, highest: u32) {
    if let Some((title, message)) = end_message(status, highest) {
        std::println!("\n==============================");
        std::println!("{:^30}", title);
        std::println!("==============================");
        std::println!("{}", message);
    }
}
