use std::fmt::{Debug, Display, Formatter};

use crate::board::{Board, BoardDone, PlayError};

pub mod minimax;
pub mod simple;

pub trait Bot<B: Board>: Debug {
    /// Pick a move to play.
    ///
    /// `self` is mutable to allow for random state, this method is not supposed to
    /// modify `self` in any other significant way.
    fn select_move(&mut self, board: &B) -> Result<B::Move, SelectError>;
}

impl<B: Board, F: FnMut(&B) -> Result<B::Move, SelectError> + Debug> Bot<B> for F {
    fn select_move(&mut self, board: &B) -> Result<B::Move, SelectError> {
        self(board)
    }
}

/// Error returned by [Bot::select_move].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SelectError {
    /// The board is already done.
    BoardDone,
    /// Exploring a move failed.
    Play(PlayError),
    /// The search did not find any move to play.
    NoMove,
}

impl From<BoardDone> for SelectError {
    fn from(_: BoardDone) -> Self {
        SelectError::BoardDone
    }
}

impl From<PlayError> for SelectError {
    fn from(e: PlayError) -> Self {
        SelectError::Play(e)
    }
}

impl Display for SelectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectError::BoardDone => write!(f, "cannot select a move on a board that is done"),
            SelectError::Play(e) => write!(f, "failed to explore a move: {}", e),
            SelectError::NoMove => write!(f, "no move found"),
        }
    }
}

impl std::error::Error for SelectError {}
