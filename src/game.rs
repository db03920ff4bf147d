//! The game driver: a finite-state machine stepped one phase at a time

use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Colour, Coordinate};
use crate::error::{InputError, MoveError};
use crate::io::{Input, Renderer, Report};
use crate::turn::{assign_colours, next_turn, random_first_mover, CoinFlip, Turn};
use crate::win::{find_winning_line, Line};
use crate::WIDTH;

/// How a finished game ended
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    /// The player completed four-in-a-row
    Win(Line),
    Draw,
    /// The computer side completed four-in-a-row
    Loss(Line),
    /// The input ran dry before the game was decided
    Abandoned,
}

/// The active phase. `mover` is the side whose disc has just landed, `None`
/// right after the start or after a rejected move.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Phase {
    Start,
    Display { mover: Option<Turn> },
    CheckOutcome { mover: Option<Turn> },
    AwaitMove,
    Win(Line),
    Draw,
    Loss(Line),
    Exit(Outcome),
}

/// Authoritative state of one game
///
/// # Notes
/// The state is a plain value: [`GameState::step`] consumes it and hands back
/// the next one, so a driver owns exactly one copy at a time. `current_turn`
/// always names the side to move next and only advances once a move has been
/// fully processed.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GameState {
    phase: Phase,
    player_colour: Colour,
    computer_colour: Colour,
    current_turn: Turn,
    board: Board,
}

impl GameState {
    /// A fresh game on an empty board, in the `Start` phase
    pub fn new(first_mover: Turn) -> Self {
        let (player_colour, computer_colour) = assign_colours(first_mover);
        Self {
            phase: Phase::Start,
            player_colour,
            computer_colour,
            current_turn: first_mover,
            board: Board::new(),
        }
    }

    /// A fresh game with the first mover decided by `coin`
    pub fn start<C: CoinFlip + ?Sized>(coin: &mut C) -> Self {
        let first_mover = random_first_mover(coin);
        info!(%first_mover, "starting a new game");
        Self::new(first_mover)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Turn {
        self.current_turn
    }

    pub fn player_colour(&self) -> Colour {
        self.player_colour
    }

    pub fn computer_colour(&self) -> Colour {
        self.computer_colour
    }

    pub fn colour_of(&self, turn: Turn) -> Colour {
        match turn {
            Turn::Player => self.player_colour,
            Turn::Computer => self.computer_colour,
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Exit(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Steps the machine until it reaches `Exit` and returns how the game ended
    pub fn run<R, I>(mut self, renderer: &mut R, input: &mut I) -> Outcome
    where
        R: Renderer + ?Sized,
        I: Input + ?Sized,
    {
        loop {
            if let Phase::Exit(outcome) = self.phase {
                notify(renderer, Report::Exiting);
                return outcome;
            }
            self = self.step(renderer, input);
        }
    }

    /// Advances exactly one phase
    #[instrument(level = "debug", skip_all, fields(phase = ?self.phase, turn = %self.current_turn))]
    pub fn step<R, I>(self, renderer: &mut R, input: &mut I) -> GameState
    where
        R: Renderer + ?Sized,
        I: Input + ?Sized,
    {
        let phase = match self.phase {
            Phase::Start => {
                notify(
                    renderer,
                    Report::Started {
                        first_mover: self.current_turn,
                    },
                );
                Phase::Display { mover: None }
            }
            Phase::Display { mover } => {
                if let Err(err) = renderer.board(&self.board) {
                    warn!(%err, "failed to draw board");
                }
                Phase::CheckOutcome { mover }
            }
            Phase::CheckOutcome { mover } => return self.check_outcome(mover),
            Phase::AwaitMove => return self.await_move(renderer, input),
            Phase::Win(line) => {
                notify(renderer, Report::Won(line));
                Phase::Exit(Outcome::Win(line))
            }
            Phase::Draw => {
                notify(renderer, Report::Drew);
                Phase::Exit(Outcome::Draw)
            }
            Phase::Loss(line) => {
                notify(renderer, Report::Lost(line));
                Phase::Exit(Outcome::Loss(line))
            }
            Phase::Exit(outcome) => Phase::Exit(outcome),
        };
        debug!(next = ?phase, "transition");
        GameState { phase, ..self }
    }

    fn check_outcome(self, mover: Option<Turn>) -> GameState {
        if self.board.is_full() {
            info!("board full, game drawn");
            return GameState {
                phase: Phase::Draw,
                ..self
            };
        }

        if let Some(side) = mover {
            let colour = self.colour_of(side);
            debug!(
                %side,
                discs = ?self.discs_of(colour),
                "checking for four-in-a-row"
            );

            if let Some(line) = find_winning_line(&self.board, colour) {
                info!(%side, ?line, "four in a row");
                let phase = match side {
                    Turn::Player => Phase::Win(line),
                    Turn::Computer => Phase::Loss(line),
                };
                return GameState { phase, ..self };
            }
        }

        GameState {
            phase: Phase::AwaitMove,
            current_turn: mover.map(next_turn).unwrap_or(self.current_turn),
            ..self
        }
    }

    fn await_move<R, I>(self, renderer: &mut R, input: &mut I) -> GameState
    where
        R: Renderer + ?Sized,
        I: Input + ?Sized,
    {
        let turn = self.current_turn;
        let colour = self.colour_of(turn);
        notify(renderer, Report::Prompt { turn, colour });

        let column = input
            .read_column()
            .map_err(MoveError::from)
            .and_then(|column| self.validate(column));

        match column {
            Ok(column) => match self.board.place(column, colour) {
                Ok(board) => {
                    info!(side = %turn, column = column + 1, "disc placed");
                    GameState {
                        phase: Phase::Display { mover: Some(turn) },
                        board,
                        ..self
                    }
                }
                Err(err) => {
                    warn!(%err, "placement failed after validation");
                    self.reject(renderer, err.into())
                }
            },
            Err(MoveError::Input(InputError::Closed)) => {
                warn!("input closed, abandoning game");
                notify(renderer, Report::InputClosed);
                GameState {
                    phase: Phase::Exit(Outcome::Abandoned),
                    ..self
                }
            }
            Err(err) => self.reject(renderer, err),
        }
    }

    // 1-indexed column from the input to a 0-indexed column with space
    fn validate(&self, column: i64) -> Result<usize, MoveError> {
        if column < 1 || column > WIDTH as i64 {
            return Err(MoveError::InvalidColumn(column));
        }
        let index = (column - 1) as usize;
        if !self.board.column_has_space(index) {
            return Err(MoveError::ColumnFull(column));
        }
        Ok(index)
    }

    fn reject<R: Renderer + ?Sized>(self, renderer: &mut R, err: MoveError) -> GameState {
        debug!(%err, "move rejected");
        notify(renderer, Report::Rejected(err));
        GameState {
            phase: Phase::Display { mover: None },
            ..self
        }
    }

    fn discs_of(&self, colour: Colour) -> Vec<Coordinate> {
        self.board
            .cells()
            .filter(|cell| cell.fill() == colour.fill())
            .map(|cell| cell.coordinate())
            .collect()
    }
}

fn notify<R: Renderer + ?Sized>(renderer: &mut R, report: Report) {
    if let Err(err) = renderer.report(report) {
        warn!(%err, "failed to write report");
    }
}
