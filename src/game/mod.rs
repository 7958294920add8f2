//! Core backgammon logic: board representation, dice, player types, and the
//! game state machine with in-place make/undo.

mod board;
mod dice;
mod moves;
mod player;
mod state;

pub use board::{Board, Point, CHECKERS_PER_SIDE, NUM_POINTS};
pub use dice::{Dice, NUM_OUTCOMES};
pub use moves::Move;
pub use player::Player;
pub use state::{GameState, MoveError};
