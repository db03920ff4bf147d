//! Plain-terminal collaborators: a crossterm renderer and a line-based input

use anyhow::Result;
use crossterm::{
    style::{style, Color, Print, PrintStyledContent, StyledContent},
    QueueableCommand,
};

use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::board::{Board, Colour, Fill};
use crate::error::InputError;
use crate::io::{Input, Renderer, Report};
use crate::WIDTH;

/// Highlights `content` in the colour of a disc
pub fn paint<D: Display + Clone>(colour: Colour, content: D) -> StyledContent<D> {
    style(content).with(match colour {
        Colour::Yellow => Color::Yellow,
        Colour::Red => Color::Red,
    })
}

/// Writes boards and reports as text, optionally ANSI-coloured
pub struct TerminalRenderer<W: Write> {
    out: W,
    colour: bool,
}

impl TerminalRenderer<Stdout> {
    pub fn stdout(colour: bool) -> Self {
        Self::new(io::stdout(), colour)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, colour: bool) -> Self {
        Self { out, colour }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn text<S: Into<String>>(&mut self, text: S) -> Result<()> {
        self.out.queue(Print(text.into()))?;
        Ok(())
    }

    fn coloured<S: Into<String>>(&mut self, colour: Colour, text: S) -> Result<()> {
        if self.colour {
            self.out.queue(PrintStyledContent(paint(colour, text.into())))?;
        } else {
            self.out.queue(Print(text.into()))?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn board(&mut self, board: &Board) -> Result<()> {
        let header: String = (1..=WIDTH).map(|x| format!(" {} ", x)).collect();
        self.text(header + "\n")?;

        for (idx, cell) in board.cells().enumerate() {
            self.text("[")?;
            let symbol = cell.fill().symbol().to_string();
            match cell.fill() {
                Fill::Empty => self.text(symbol)?,
                Fill::Yellow => self.coloured(Colour::Yellow, symbol)?,
                Fill::Red => self.coloured(Colour::Red, symbol)?,
            }
            self.text("]")?;
            if idx % WIDTH == WIDTH - 1 {
                self.text("\n")?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn report(&mut self, report: Report) -> Result<()> {
        match report {
            Report::Started { first_mover } => {
                self.text("Starting a game of Connect 4...\n")?;
                self.coloured(Colour::Yellow, first_mover.name())?;
                self.text(" is going first\n")?;
            }
            Report::Prompt { turn, colour } => {
                self.coloured(colour, turn.name())?;
                self.text(" place disk: ")?;
            }
            other => self.text(format!("{}\n", other))?,
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Reads one column number per line
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl LineInput<BufReader<Stdin>> {
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Input for LineInput<R> {
    fn read_column(&mut self) -> Result<i64, InputError> {
        let mut buffer = String::new();
        if self.reader.read_line(&mut buffer)? == 0 {
            return Err(InputError::Closed);
        }

        let token = buffer.split_whitespace().next().unwrap_or("");
        token
            .parse::<i64>()
            .map_err(|_| InputError::Malformed(buffer.trim().to_string()))
    }
}
