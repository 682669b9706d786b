#![warn(missing_debug_implementations)]
#![allow(clippy::new_without_default)]

//! A k-in-a-row ("gomoku" or "gobang") engine built on a small [Board](crate::board::Board) abstraction
//! for deterministic two player games.
//!
//! # Features
//!
//! * [GomokuBoard](crate::games::gomoku::GomokuBoard), k-in-a-row on a rectangular board of any size,
//!     configured with a [GameConfig](crate::games::gomoku::GameConfig).
//! * A pattern based evaluation of non-terminal positions,
//!     see [heuristic::gomoku](crate::heuristic::gomoku).
//! * Depth limited tree search that works for any [Board](crate::board::Board) and
//!     [Heuristic](crate::ai::minimax::Heuristic):
//!     * [minimax_search](crate::ai::minimax::minimax_search), which visits every candidate move.
//!     * [alphabeta_search](crate::ai::minimax::alphabeta_search), the same search with alpha-beta pruning.
//! * Game-playing bots:
//!     * [SearchBot](crate::ai::minimax::SearchBot), which plays the move found by a search.
//!     * [RandomBot](crate::ai::simple::RandomBot), which simply picks a random move.
//! * A bot vs bot game runner, see [bot_game](crate::util::bot_game).
//!
//! # Examples
//!
//! ## Find the winning move
//!
//! ```
//! # use gobang::ai::minimax::alphabeta_search;
//! # use gobang::games::gomoku::{GomokuBoard, Square};
//! # use gobang::heuristic::gomoku::GomokuHeuristic;
//! let board = GomokuBoard::from_diagram("x../ox./... x 3").unwrap();
//! println!("{}", board);
//!
//! let result = alphabeta_search(&board, &GomokuHeuristic, 2).unwrap();
//! assert_eq!(result.best_move, Some(Square::new(2, 2)));
//! assert_eq!(result.value, board.config().win_utility());
//! ```
//!
//! ## Play a game between two bots
//!
//! ```
//! # use gobang::ai::minimax::{Algorithm, SearchBot};
//! # use gobang::ai::simple::RandomBot;
//! # use gobang::games::gomoku::{GameConfig, GomokuBoard};
//! # use gobang::heuristic::gomoku::GomokuHeuristic;
//! # use gobang::util::bot_game::play_game;
//! # use gobang::util::tiny::consistent_rng;
//! let start = GomokuBoard::new(GameConfig::new(5, 5, 3).unwrap());
//! let mut bot_a = SearchBot::new(Algorithm::AlphaBeta, 1, GomokuHeuristic);
//! let mut bot_b = RandomBot::new(consistent_rng());
//!
//! let replay = play_game(&start, &mut bot_a, &mut bot_b).unwrap();
//! println!("{:?} after {} moves", replay.outcome, replay.moves.len());
//! ```

pub mod board;

pub mod ai;

pub mod games;

pub mod heuristic;

pub mod util;
