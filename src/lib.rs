//! A turn-based engine for the board game 'Connect 4'
//!
//! The engine is a small finite-state machine that owns the board, decides
//! who plays Yellow and who plays Red, validates each column drop and
//! detects four-in-a-row or a full board. Printing and input scanning are
//! left to the [`io::Renderer`] and [`io::Input`] collaborators.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::Board, board::Colour, win::find_winning_line};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // Yellow stacks column 4, Red answers in column 1
//! let board = Board::from_moves("4141414")?;
//! let line = find_winning_line(&board, Colour::Yellow);
//!
//! assert!(line.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod win;

pub mod turn;

pub mod game;

pub mod io;

pub mod terminal;

pub mod error;

pub mod config;


pub use board::{Board, Cell, Colour, Coordinate, Fill};
pub use error::{ConfigError, InputError, MoveError, PlacementError};
pub use game::{GameState, Outcome, Phase};
pub use turn::Turn;
pub use win::{find_winning_line, Direction, Line};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of same-coloured discs in a line needed to win
pub const CONNECT: usize = 4;

// a winning line has to fit on the board in at least one direction
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
// column input is a single digit
const_assert!(WIDTH < 10);
