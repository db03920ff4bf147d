//! Turn order and colour assignment

use rand::Rng;

use std::fmt;

use crate::board::Colour;

/// Which side is to move. `Computer` is only a label for the second seat.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Turn {
    Player,
    Computer,
}

impl Turn {
    pub fn name(self) -> &'static str {
        match self {
            Turn::Player => "Player",
            Turn::Computer => "Computer",
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Source of the single random decision in a game
pub trait CoinFlip {
    fn coin_flip(&mut self) -> bool;
}

impl<R: Rng> CoinFlip for R {
    fn coin_flip(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// The side going first is always Yellow. Returns `(player, computer)`.
pub fn assign_colours(first_mover: Turn) -> (Colour, Colour) {
    match first_mover {
        Turn::Player => (Colour::Yellow, Colour::Red),
        Turn::Computer => (Colour::Red, Colour::Yellow),
    }
}

pub fn next_turn(current: Turn) -> Turn {
    match current {
        Turn::Player => Turn::Computer,
        Turn::Computer => Turn::Player,
    }
}

pub fn random_first_mover<C: CoinFlip + ?Sized>(coin: &mut C) -> Turn {
    if coin.coin_flip() {
        Turn::Player
    } else {
        Turn::Computer
    }
}
