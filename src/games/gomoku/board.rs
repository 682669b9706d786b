use std::collections::BTreeSet;
use std::ops::ControlFlow;

use internal_iterator::InternalIterator;

use crate::board::{AvailableMovesIterator, Board, BoardDone, BoardMoves, Outcome, PlayError, Player};
use crate::games::gomoku::rules::{has_neighbor, k_in_row};
use crate::games::gomoku::{GameConfig, Square, Value};

/// A k-in-a-row board of arbitrary size.
///
/// `utility` caches the terminal value from the POV of [Player::A]:
/// `+W` if A has won, `-W` if B has won and zero otherwise, with `W = 1000^(k+1)`.
/// A full board without a winner is done with utility zero.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct GomokuBoard {
    config: GameConfig,
    tiles: Vec<Option<Player>>,
    next_player: Player,
    stones: usize,
    utility: Value,
}

impl GomokuBoard {
    /// An empty board where [Player::A] moves first.
    pub fn new(config: GameConfig) -> GomokuBoard {
        GomokuBoard {
            config,
            tiles: vec![None; config.area()],
            next_player: Player::A,
            stones: 0,
            utility: 0,
        }
    }

    /// Build a board from raw parts, recomputing the utility by scanning for runs.
    /// Returns `None` if both players have a winning run.
    pub(super) fn from_parts(
        config: GameConfig,
        tiles: Vec<Option<Player>>,
        next_player: Player,
    ) -> Option<GomokuBoard> {
        assert_eq!(tiles.len(), config.area());

        let stones = tiles.iter().filter(|t| t.is_some()).count();
        let mut board = GomokuBoard {
            config,
            tiles,
            next_player,
            stones,
            utility: 0,
        };

        let won_by = |player: Player| {
            config
                .squares()
                .any(|sq| board.tile(sq) == Some(player) && k_in_row(&board, player, sq, config.k()))
        };
        let utility = match (won_by(Player::A), won_by(Player::B)) {
            (true, true) => return None,
            (true, false) => config.win_utility(),
            (false, true) => -config.win_utility(),
            (false, false) => 0,
        };

        board.utility = utility;
        Some(board)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The stone on `square`, `None` if it is empty or off the board.
    pub fn tile(&self, square: Square) -> Option<Player> {
        if self.config.contains(square) {
            self.tiles[self.config.index(square)]
        } else {
            None
        }
    }

    pub fn stone_count(&self) -> usize {
        self.stones
    }

    pub fn is_full(&self) -> bool {
        self.stones == self.config.area()
    }

    /// The cached terminal utility, from the POV of [Player::A].
    pub fn utility(&self) -> Value {
        self.utility
    }

    /// The utility from the POV of `player`. This is zero-sum: the values for both players always cancel out.
    pub fn utility_for(&self, player: Player) -> Value {
        match player {
            Player::A => self.utility,
            Player::B => -self.utility,
        }
    }

    /// All empty squares, in ascending order.
    /// Unlike [BoardMoves::available_moves] this also works for done boards.
    pub fn legal_actions(&self) -> BTreeSet<Square> {
        self.config.squares().filter(|&sq| self.tile(sq).is_none()).collect()
    }

    /// See [has_neighbor].
    pub fn has_neighbor(&self, square: Square, legal: &BTreeSet<Square>) -> bool {
        has_neighbor(&self.config, square, legal)
    }

    /// The legal actions that pass the neighbor filter, in ascending order.
    /// These are the only moves the search expands.
    pub fn neighbor_actions(&self) -> Vec<Square> {
        let legal = self.legal_actions();
        legal
            .iter()
            .copied()
            .filter(|&sq| has_neighbor(&self.config, sq, &legal))
            .collect()
    }

    /// Place a stone for `player` without touching the turn or the utility.
    /// Used to simulate a move for evaluation.
    pub fn with_stone(&self, square: Square, player: Player) -> Result<GomokuBoard, PlayError> {
        if !self.config.contains(square) || self.tile(square).is_some() {
            return Err(PlayError::UnavailableMove);
        }
        let mut next = self.clone();
        next.tiles[self.config.index(square)] = Some(player);
        next.stones += 1;
        Ok(next)
    }
}

impl Board for GomokuBoard {
    type Move = Square;

    fn next_player(&self) -> Player {
        self.next_player
    }

    fn is_available_move(&self, mv: Self::Move) -> Result<bool, BoardDone> {
        self.check_done()?;
        Ok(self.config.contains(mv) && self.tile(mv).is_none())
    }

    fn play(&mut self, mv: Self::Move) -> Result<(), PlayError> {
        self.check_can_play(mv)?;

        let player = self.next_player;
        self.tiles[self.config.index(mv)] = Some(player);
        self.stones += 1;
        self.next_player = player.other();

        self.utility = if k_in_row(self, player, mv, self.config.k()) {
            player.sign::<Value>(Player::A) * self.config.win_utility()
        } else {
            0
        };

        Ok(())
    }

    fn outcome(&self) -> Option<Outcome> {
        if self.utility > 0 {
            Some(Outcome::WonBy(Player::A))
        } else if self.utility < 0 {
            Some(Outcome::WonBy(Player::B))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }
}

impl<'a> BoardMoves<'a, GomokuBoard> for GomokuBoard {
    type AvailableMovesIterator = AvailableMovesIterator<'a, GomokuBoard>;

    fn available_moves(&'a self) -> Result<Self::AvailableMovesIterator, BoardDone> {
        AvailableMovesIterator::new(self)
    }
}

impl InternalIterator for AvailableMovesIterator<'_, GomokuBoard> {
    type Item = Square;

    fn try_for_each<R, F>(self, mut f: F) -> ControlFlow<R>
    where
        F: FnMut(Self::Item) -> ControlFlow<R>,
    {
        let board = self.board();
        for sq in board.config.squares() {
            if board.tile(sq).is_none() {
                f(sq)?;
            }
        }
        ControlFlow::Continue(())
    }

    fn count(self) -> usize {
        let board = self.board();
        board.config.area() - board.stones
    }
}
