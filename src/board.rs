use anyhow::{anyhow, Result};

use std::fmt;

use crate::{error::PlacementError, HEIGHT, WIDTH};

/// One of the two disc colours
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Colour {
    Yellow,
    Red,
}

impl Colour {
    /// The cell fill left behind by a disc of this colour
    pub fn fill(self) -> Fill {
        match self {
            Colour::Yellow => Fill::Yellow,
            Colour::Red => Fill::Red,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Fill {
    Empty,
    Yellow,
    Red,
}

impl Fill {
    pub fn is_empty(&self) -> bool {
        matches!(self, Fill::Empty)
    }

    /// Single-letter tag used when drawing the board
    pub fn symbol(self) -> char {
        match self {
            Fill::Empty => 'E',
            Fill::Yellow => 'Y',
            Fill::Red => 'R',
        }
    }
}

/// A position on the board. Column 0 is on the left, row 0 is the top row.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Coordinate {
    pub col: usize,
    pub row: usize,
}

impl Coordinate {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Cell {
    coordinate: Coordinate,
    fill: Fill,
}

impl Cell {
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn fill(&self) -> Fill {
        self.fill
    }
}

/// A 7x6 Connect 4 grid
///
/// # Notes
/// Every coordinate is present exactly once, and each column only ever holds
/// a contiguous stack of discs growing up from the bottom row. The only way
/// to change a cell is [`Board::place`], which returns a new board and leaves
/// `self` untouched.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    // cells are stored top-to-bottom, left-to-right
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    pub fn new() -> Self {
        let mut cells = [[Cell {
            coordinate: Coordinate::new(0, 0),
            fill: Fill::Empty,
        }; WIDTH]; HEIGHT];

        for (row, row_cells) in cells.iter_mut().enumerate() {
            for (col, cell) in row_cells.iter_mut().enumerate() {
                cell.coordinate = Coordinate::new(col, row);
            }
        }
        Self { cells }
    }

    /// Builds a board from a string of 1-indexed column digits, alternating
    /// Yellow and Red with Yellow dropping first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut board = Self::new();
        let mut colour = Colour::Yellow;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    board = board.place(column - 1, colour)?;
                    colour = match colour {
                        Colour::Yellow => Colour::Red,
                        Colour::Red => Colour::Yellow,
                    };
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(board)
    }

    /// The cell at `coordinate`, or `None` if it lies off the board
    pub fn get(&self, coordinate: Coordinate) -> Option<&Cell> {
        self.cells
            .get(coordinate.row)
            .and_then(|row| row.get(coordinate.col))
    }

    /// Iterates over every cell, row-major from the top-left corner
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter())
    }

    pub fn disc_count(&self) -> usize {
        self.cells().filter(|cell| !cell.fill.is_empty()).count()
    }

    /// Drops a `colour` disc into `column` (0-indexed), returning the new board
    pub fn place(&self, column: usize, colour: Colour) -> Result<Board, PlacementError> {
        if column >= WIDTH {
            return Err(PlacementError::ColumnOutOfRange(column));
        }

        let row = (0..HEIGHT)
            .rev()
            .find(|&row| self.cells[row][column].fill.is_empty())
            .ok_or(PlacementError::ColumnFull(column))?;

        let mut board = *self;
        board.cells[row][column].fill = colour.fill();
        Ok(board)
    }

    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| !cell.fill.is_empty())
    }

    /// Whether another disc fits in `column` (0-indexed). Columns off the
    /// board never have space.
    pub fn column_has_space(&self, column: usize) -> bool {
        column < WIDTH && self.cells[0][column].fill.is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in 1..=WIDTH {
            write!(f, " {} ", column)?;
        }
        writeln!(f)?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                write!(f, "[{}]", cell.fill.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
