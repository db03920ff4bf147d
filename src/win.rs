//! Four-in-a-row detection

use tracing::instrument;

use crate::board::{Board, Colour, Coordinate};
use crate::CONNECT;

/// The four "forward" directions a line is grown in from its first disc.
/// Their mirrors would find the same lines again from the other end.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Direction {
    /// left to right
    Horizontal,
    /// bottom to top
    Vertical,
    /// bottom-left to top-right
    DiagonalUp,
    /// top-left to bottom-right
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// Column and row step; rows count downwards from the top
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, -1),
            Direction::DiagonalUp => (1, -1),
            Direction::DiagonalDown => (1, 1),
        }
    }
}

/// A completed four-in-a-row
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Line {
    pub colour: Colour,
    pub direction: Direction,
    pub cells: [Coordinate; CONNECT],
}

/// Finds the first four-in-a-row of `colour`, scanning origins top-to-bottom,
/// left-to-right and trying each [`Direction`] in turn
#[instrument(level = "trace", skip(board))]
pub fn find_winning_line(board: &Board, colour: Colour) -> Option<Line> {
    let target = colour.fill();

    for origin in board.cells().filter(|cell| cell.fill() == target) {
        for &direction in Direction::ALL.iter() {
            if let Some(cells) = line_from(board, origin.coordinate(), direction, colour) {
                return Some(Line {
                    colour,
                    direction,
                    cells,
                });
            }
        }
    }
    None
}

// the CONNECT coordinates starting at `origin`, if all are on the board and
// hold `colour`
fn line_from(
    board: &Board,
    origin: Coordinate,
    direction: Direction,
    colour: Colour,
) -> Option<[Coordinate; CONNECT]> {
    let (dx, dy) = direction.delta();
    let mut cells = [origin; CONNECT];

    for (step, slot) in cells.iter_mut().enumerate() {
        let col = origin.col as isize + dx * step as isize;
        let row = origin.row as isize + dy * step as isize;
        if col < 0 || row < 0 {
            return None;
        }
        let coordinate = Coordinate::new(col as usize, row as usize);
        match board.get(coordinate) {
            Some(cell) if cell.fill() == colour.fill() => *slot = coordinate,
            _ => return None,
        }
    }
    Some(cells)
}
