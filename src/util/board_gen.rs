//! Utilities to reach a `Board` in a given or random state, mostly used by tests.
use rand::Rng;

use crate::board::{Board, BoardDone, PlayError};

/// Play the given moves, starting from `start`.
/// Stops at the first move that cannot be played.
pub fn board_with_moves<B: Board>(start: B, moves: &[B::Move]) -> Result<B, PlayError> {
    moves.iter().try_fold(start, |board, &mv| board.clone_and_play(mv))
}

/// Generate a `Board` by playing `n` random moves on `start`.
/// Simulations that end before `n` moves are thrown away and restarted.
pub fn random_board_with_moves<B: Board>(start: &B, n: u32, rng: &mut impl Rng) -> B {
    loop {
        let mut board = start.clone();
        let reached = (0..n).all(|_| board.play_random_available_move(rng).is_ok());
        if reached {
            return board;
        }
    }
}

/// Iterator over the boards of an endless series of random games.
/// Yields every intermediate board, the start and the final board of each game included.
#[derive(Debug, Clone)]
pub struct RandomBoardIterator<B: Board, R: Rng> {
    start: B,
    rng: R,
    next: Option<B>,
}

impl<B: Board, R: Rng> RandomBoardIterator<B, R> {
    pub fn new(start: B, rng: R) -> Result<Self, BoardDone> {
        start.check_done()?;
        Ok(RandomBoardIterator {
            next: Some(start.clone()),
            start,
            rng,
        })
    }
}

impl<B: Board, R: Rng> Iterator for RandomBoardIterator<B, R> {
    type Item = B;

    fn next(&mut self) -> Option<B> {
        let board = self.next.take().unwrap_or_else(|| self.start.clone());

        let mut following = board.clone();
        if following.play_random_available_move(&mut self.rng).is_ok() {
            self.next = Some(following);
        }

        Some(board)
    }
}
