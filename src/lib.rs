//! A two-player game of 'Connect 4' played in the terminal.
//!
//! The rules engine lives in [`board`]: gravity drops, move legality
//! and streak-based win detection along the row and column of the
//! last move. [`game`] wraps it in the turn/win state machine the
//! interactive front end drives.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_board::board::Player;
//! use connect4_board::game::{GameSession, Status};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let game = GameSession::from_moves("4545454")?;
//!
//! assert!(game.status() == Status::Won(Player::One));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod game;


/// The width of the game board in tiles
pub const COLS: usize = 7;

/// The height of the game board in tiles
pub const ROWS: usize = 6;

/// The streak length needed to win
pub const WIN_LENGTH: usize = 4;

// ensure a winning streak fits on the board in both directions
const_assert!(WIN_LENGTH <= COLS);
const_assert!(WIN_LENGTH <= ROWS);
