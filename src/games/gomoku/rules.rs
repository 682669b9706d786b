use std::collections::BTreeSet;

use crate::board::Player;
use crate::games::gomoku::{Direction, GameConfig, GomokuBoard, Square};

/// The number of consecutive stones of `player` starting at `square` and walking in `dir`.
/// `square` itself is included, so this is zero if it does not hold a stone of `player`.
pub fn run_length(board: &GomokuBoard, player: Player, square: Square, dir: Direction) -> u32 {
    let config = board.config();
    let mut count = 0;
    let mut curr = Some(square);
    while let Some(sq) = curr {
        if board.tile(sq) != Some(player) {
            break;
        }
        count += 1;
        curr = sq.step(dir, 1, config.width(), config.height());
    }
    count
}

/// Whether `player` has at least `k` stones in a row along any of the 4 lines through `square`.
pub fn k_in_row(board: &GomokuBoard, player: Player, square: Square, k: u8) -> bool {
    Direction::LINES.iter().any(|&dir| {
        let forward = run_length(board, player, square, dir);
        let backward = run_length(board, player, square, dir.reverse());
        (forward + backward).saturating_sub(1) >= k as u32
    })
}

/// Whether `square` has an occupied square among its 8 neighbours, given the set of `legal` (empty) squares.
///
/// This only limits which moves the search explores, it never makes a move unplayable.
/// On an empty board the center square counts as occupied, so the first move can still be found.
/// The center square itself then passes as well.
pub fn has_neighbor(config: &GameConfig, square: Square, legal: &BTreeSet<Square>) -> bool {
    let board_empty = legal.len() == config.area();
    let center = config.center();

    let is_occupied = |sq: Square| {
        if board_empty {
            sq == center
        } else {
            !legal.contains(&sq)
        }
    };

    // the offset (0, 0) is included, it can only match the artificial center
    (-1..=1).any(|dx| {
        (-1..=1).any(|dy| {
            square
                .step(Direction::new(dx, dy), 1, config.width(), config.height())
                .map_or(false, is_occupied)
        })
    })
}
