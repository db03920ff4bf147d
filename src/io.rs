//! The seams between the game engine and the outside world

use anyhow::Result;

use std::fmt;

use crate::board::{Board, Colour};
use crate::error::{InputError, MoveError};
use crate::turn::Turn;
use crate::win::Line;

/// Something worth telling the people at the board
#[derive(Debug)]
pub enum Report {
    Started { first_mover: Turn },
    /// Printed right before the blocking read, without a trailing newline
    Prompt { turn: Turn, colour: Colour },
    Rejected(MoveError),
    Won(Line),
    Drew,
    Lost(Line),
    InputClosed,
    Exiting,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Started { first_mover } => write!(
                f,
                "Starting a game of Connect 4...\n{} is going first",
                first_mover
            ),
            Report::Prompt { turn, .. } => write!(f, "{} place disk: ", turn),
            Report::Rejected(err) => write!(f, "{}", err),
            Report::Won(_) => f.write_str("WIN"),
            Report::Drew => {
                f.write_str("The board is full and nobody has won, the result is a draw.")
            }
            Report::Lost(_) => f.write_str("LOSE"),
            Report::InputClosed => f.write_str("No more input, abandoning the game."),
            Report::Exiting => f.write_str("Exiting..."),
        }
    }
}

/// Draws the board and relays [`Report`]s
pub trait Renderer {
    fn board(&mut self, board: &Board) -> Result<()>;

    fn report(&mut self, report: Report) -> Result<()>;
}

/// Supplies the column chosen by whoever is to move, 1-indexed
pub trait Input {
    fn read_column(&mut self) -> Result<i64, InputError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_text() {
        let started = Report::Started {
            first_mover: Turn::Computer,
        };
        assert_eq!(
            started.to_string(),
            "Starting a game of Connect 4...\nComputer is going first"
        );

        let prompt = Report::Prompt {
            turn: Turn::Player,
            colour: Colour::Red,
        };
        assert_eq!(prompt.to_string(), "Player place disk: ");

        let rejected = Report::Rejected(MoveError::InvalidColumn(0));
        assert_eq!(
            rejected.to_string(),
            "Invalid disk position [0], please choose a column between 1 and 7"
        );
        assert_eq!(Report::Exiting.to_string(), "Exiting...");
    }
}
