//! Gomoku, or more generally k-in-a-row, on a rectangular board of any size.
//!
//! [Player::A](crate::board::Player::A) (`x`) moves first, the first player to get `k` stones in a row
//! horizontally, vertically or diagonally wins.
pub use board::GomokuBoard;
pub use config::{GameConfig, InvalidConfig};
pub use io::InvalidDiagram;
pub use square::{Direction, Square};

mod board;
mod config;
mod io;
pub mod rules;
mod square;

/// The type used for utilities, heuristic scores and search values.
pub type Value = i128;
