use std::cmp::{max, min};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use internal_iterator::InternalIterator;
use log::debug;
use num_traits::Bounded;

use crate::ai::{Bot, SelectError};
use crate::board::{Board, PlayError, Player};

/// The depth limit used when none is given explicitly.
pub const DEFAULT_DEPTH: u32 = 2;

pub trait Heuristic<B: Board> {
    /// The type used to represent the value of a board.
    type V: Copy + Ord + Debug + Bounded;

    /// Return the value of the done `board` from the POV of `pov`.
    fn outcome_value(&self, board: &B, pov: Player) -> Self::V;

    /// Return the value of playing `mv` on `board`, used instead of recursing once the depth limit is reached.
    fn frontier_value(&self, board: &B, mv: B::Move) -> Result<Self::V, PlayError>;

    /// The moves worth searching on the non-done `board`, in the order they are tried.
    /// Must be a subset of the available moves, defaults to all of them.
    fn candidate_moves(&self, board: &B) -> Vec<B::Move> {
        board.available_moves().map_or(vec![], |moves| moves.collect())
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchResult<V, M> {
    /// The value of this board for the player to move.
    pub value: V,

    /// The best move to play, `None` if the board is done or no candidate move exists.
    pub best_move: Option<M>,

    /// The number of boards visited.
    pub nodes: u64,
}

/// The depth limited tree search to use.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

impl Algorithm {
    pub fn search<B: Board, H: Heuristic<B>>(
        self,
        board: &B,
        heuristic: &H,
        depth: u32,
    ) -> Result<SearchResult<H::V, B::Move>, PlayError> {
        match self {
            Algorithm::Minimax => minimax_search(board, heuristic, depth),
            Algorithm::AlphaBeta => alphabeta_search(board, heuristic, depth),
        }
    }
}

/// Search `board` up to `depth` moves deep, visiting every candidate move.
/// The returned value is from the POV of `board.next_player()`.
///
/// At depth zero the candidate moves are scored with [Heuristic::frontier_value] without playing them.
/// Ties keep the first move in [Heuristic::candidate_moves] order.
pub fn minimax_search<B: Board, H: Heuristic<B>>(
    board: &B,
    heuristic: &H,
    depth: u32,
) -> Result<SearchResult<H::V, B::Move>, PlayError> {
    search(Algorithm::Minimax, board, heuristic, depth, FullWindow)
}

/// The same search as [minimax_search] with alpha-beta pruning.
/// The root value is always the same, but fewer boards are visited.
pub fn alphabeta_search<B: Board, H: Heuristic<B>>(
    board: &B,
    heuristic: &H,
    depth: u32,
) -> Result<SearchResult<H::V, B::Move>, PlayError> {
    let window = AlphaBetaWindow {
        alpha: <H::V as Bounded>::min_value(),
        beta: <H::V as Bounded>::max_value(),
    };
    search(Algorithm::AlphaBeta, board, heuristic, depth, window)
}

fn search<B: Board, H: Heuristic<B>, W: Window<H::V>>(
    algorithm: Algorithm,
    board: &B,
    heuristic: &H,
    depth: u32,
    window: W,
) -> Result<SearchResult<H::V, B::Move>, PlayError> {
    let mut searcher = Searcher {
        heuristic,
        root: board.next_player(),
        nodes: 0,
        ph: PhantomData,
    };

    let (value, best_move) = searcher.recurse(board, depth, true, window)?;
    debug!(
        "{:?} depth {}: value {:?}, move {:?}, {} nodes",
        algorithm, depth, value, best_move, searcher.nodes
    );

    Ok(SearchResult {
        value,
        best_move,
        nodes: searcher.nodes,
    })
}

/// The bounds a node is searched with. Copied into every recursive call.
trait Window<V>: Copy {
    /// A maximizing node found a new best value.
    fn raise(&mut self, value: V);

    /// A minimizing node found a new best value.
    fn lower(&mut self, value: V);

    /// Whether the remaining siblings can be skipped.
    fn is_cutoff(&self) -> bool;
}

/// No pruning at all.
#[derive(Debug, Copy, Clone)]
struct FullWindow;

impl<V> Window<V> for FullWindow {
    fn raise(&mut self, _: V) {}

    fn lower(&mut self, _: V) {}

    fn is_cutoff(&self) -> bool {
        false
    }
}

#[derive(Debug, Copy, Clone)]
struct AlphaBetaWindow<V> {
    alpha: V,
    beta: V,
}

impl<V: Ord + Copy> Window<V> for AlphaBetaWindow<V> {
    fn raise(&mut self, value: V) {
        self.alpha = max(self.alpha, value);
    }

    fn lower(&mut self, value: V) {
        self.beta = min(self.beta, value);
    }

    fn is_cutoff(&self) -> bool {
        self.alpha >= self.beta
    }
}

struct Searcher<'a, B: Board, H: Heuristic<B>> {
    heuristic: &'a H,
    root: Player,
    nodes: u64,
    ph: PhantomData<B>,
}

impl<B: Board, H: Heuristic<B>> Searcher<'_, B, H> {
    /// The core search, alternating between maximizing and minimizing the value for `self.root`.
    fn recurse<W: Window<H::V>>(
        &mut self,
        board: &B,
        depth_left: u32,
        maximize: bool,
        mut window: W,
    ) -> Result<(H::V, Option<B::Move>), PlayError> {
        self.nodes += 1;

        if board.is_done() {
            return Ok((self.heuristic.outcome_value(board, self.root), None));
        }

        let mut best_value = if maximize {
            <H::V as Bounded>::min_value()
        } else {
            <H::V as Bounded>::max_value()
        };
        let mut best_move = None;

        for mv in self.heuristic.candidate_moves(board) {
            let value = if depth_left == 0 {
                self.heuristic.frontier_value(board, mv)?
            } else {
                let child = board.clone_and_play(mv)?;
                self.recurse(&child, depth_left - 1, !maximize, window)?.0
            };

            let improved = if maximize {
                value > best_value
            } else {
                value < best_value
            };

            if improved {
                best_value = value;
                best_move = Some(mv);

                if maximize {
                    window.raise(value);
                } else {
                    window.lower(value);
                }
            }

            if window.is_cutoff() {
                break;
            }
        }

        Ok((best_value, best_move))
    }
}

/// Bot that plays the move picked by a depth limited search.
pub struct SearchBot<B: Board, H: Heuristic<B>> {
    algorithm: Algorithm,
    depth: u32,
    heuristic: H,
    ph: PhantomData<B>,
}

impl<B: Board, H: Heuristic<B> + Debug> Debug for SearchBot<B, H> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchBot {{ algorithm: {:?}, depth: {}, heuristic: {:?} }}",
            self.algorithm, self.depth, self.heuristic
        )
    }
}

impl<B: Board, H: Heuristic<B>> SearchBot<B, H> {
    pub fn new(algorithm: Algorithm, depth: u32, heuristic: H) -> Self {
        SearchBot {
            algorithm,
            depth,
            heuristic,
            ph: PhantomData,
        }
    }
}

impl<B: Board, H: Heuristic<B> + Debug> Bot<B> for SearchBot<B, H> {
    fn select_move(&mut self, board: &B) -> Result<B::Move, SelectError> {
        board.check_done()?;
        let result = self.algorithm.search(board, &self.heuristic, self.depth)?;
        result.best_move.ok_or(SelectError::NoMove)
    }
}
