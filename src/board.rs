use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

use internal_iterator::InternalIterator;
use rand::Rng;

/// One of the two players.
/// `A` always moves first, it is rendered as `x`, `B` as `o`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

/// The absolute outcome for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    WonBy(Player),
    Draw,
}

/// Error returned when an operation needs a board that is not done yet.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BoardDone;

/// Error returned by [Board::play].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlayError {
    BoardDone,
    UnavailableMove,
}

/// The main trait of this crate. Represents the state of a game.
/// Each game implementation is supposed to provide it's own constructors to allow for customizable start positions.
pub trait Board: 'static + Debug + Display + Clone + Eq + Hash + Send + Sync
where
    for<'a> Self: BoardMoves<'a, Self>,
{
    /// The type used to represent moves on this board.
    type Move: Debug + Display + Eq + Ord + Hash + Copy + Send + Sync;

    /// Return the next player to make a move.
    /// If the board is done this is the player that did not play the last move for consistency.
    fn next_player(&self) -> Player;

    /// Return whether the given move is available.
    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone>;

    /// Pick a random move from the `available_moves` with a uniform distribution.
    /// Can be overridden for better performance.
    fn random_available_move(&self, rng: &mut impl Rng) -> Result<Self::Move, BoardDone> {
        let count = self.available_moves()?.count();
        let index = rng.gen_range(0..count);
        Ok(self
            .available_moves()?
            .nth(index)
            .expect("index is less than the number of available moves"))
    }

    /// Play the move `mv`, modifying this board.
    /// On error the board is left unchanged.
    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError>;

    /// Clone this board, play `mv` on it and return the new board.
    fn clone_and_play(&self, mv: Self::Move) -> Result<Self, PlayError> {
        let mut next = self.clone();
        next.play(mv)?;
        Ok(next)
    }

    /// Play a random available move.
    fn play_random_available_move(&mut self, rng: &mut impl Rng) -> Result<(), BoardDone> {
        let mv = self.random_available_move(rng)?;
        self.play(mv).expect("the move was just picked from the available moves");
        Ok(())
    }

    /// The outcome of this board, is `None` when this games is not done yet.
    fn outcome(&self) -> Option<Outcome>;

    /// Whether this games is done.
    fn is_done(&self) -> bool {
        self.outcome().is_some()
    }

    /// Return `Err(BoardDone)` if this board is done.
    fn check_done(&self) -> Result<(), BoardDone> {
        if self.is_done() {
            Err(BoardDone)
        } else {
            Ok(())
        }
    }

    /// Return an error if `mv` cannot be played on this board.
    fn check_can_play(&self, mv: Self::Move) -> Result<(), PlayError> {
        if self.is_available_move(mv)? {
            Ok(())
        } else {
            Err(PlayError::UnavailableMove)
        }
    }
}

/// A helper trait to get the correct lifetimes for [BoardMoves::available_moves].
/// This is a workaround to get generic associated types, See <https://github.com/rust-lang/rust/issues/44265>.
pub trait BoardMoves<'a, B: Board> {
    type AvailableMovesIterator: InternalIterator<Item = B::Move>;

    /// Return an iterator over available moves, is always nonempty.
    /// The ordering is ascending by [Ord] on the move type.
    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone>;
}

/// A convenient type to use for the iterator returned by [BoardMoves::available_moves].
#[derive(Debug)]
pub struct AvailableMovesIterator<'a, B: Board>(&'a B);

impl<'a, B: Board> AvailableMovesIterator<'a, B> {
    pub fn new(board: &'a B) -> Result<Self, BoardDone> {
        board.check_done()?;
        Ok(AvailableMovesIterator(board))
    }

    pub fn board(&self) -> &'a B {
        self.0
    }
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    pub fn other(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::A => 'x',
            Player::B => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Player> {
        match c {
            'x' => Some(Player::A),
            'o' => Some(Player::B),
            _ => None,
        }
    }

    /// `1` if `self == pov`, `-1` otherwise.
    pub fn sign<V: num_traits::One + std::ops::Neg<Output = V>>(self, pov: Player) -> V {
        if self == pov {
            V::one()
        } else {
            -V::one()
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char().to_ascii_uppercase())
    }
}

impl Display for BoardDone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "the board is done")
    }
}

impl std::error::Error for BoardDone {}

impl From<BoardDone> for PlayError {
    fn from(_: BoardDone) -> Self {
        PlayError::BoardDone
    }
}

impl Display for PlayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::BoardDone => write!(f, "cannot play on a board that is done"),
            PlayError::UnavailableMove => write!(f, "the move is not available"),
        }
    }
}

impl std::error::Error for PlayError {}
