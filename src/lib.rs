#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod direction;
mod game;
mod grid;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use common::*;
pub use config::*;
pub use direction::*;
pub use game::*;
pub use grid::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with_default, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
#[cfg(feature = "std")]
pub use session::{Session, SessionSummary};
