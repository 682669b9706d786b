//! Pattern based evaluation of non-terminal gomoku positions.
//!
//! Every stone is inspected along the 4 lines through it, the runs found are tallied by how many of their
//! ends are blocked and the tallies are turned into a score by a fixed, ordered table of [Rule]s.
use crate::ai::minimax::Heuristic;
use crate::board::{Board, PlayError, Player};
use crate::games::gomoku::{Direction, GomokuBoard, Square, Value};

/// How far a line is followed from a stone in each direction.
const MAX_WALK: i16 = 4;

/// Weight of the opponent's score in [board_score].
pub const OPPONENT_WEIGHT: Value = 30;

/// Counts of runs of a fixed length for one player, split by the number of blocked ends.
/// An end is blocked by the board edge or an opponent stone.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LineStatus {
    /// Neither end blocked.
    pub life: u32,
    /// Exactly one end blocked.
    pub one_dead: u32,
    /// Both ends blocked.
    pub both_dead: u32,
}

impl LineStatus {
    fn divided(self, n: u32) -> LineStatus {
        LineStatus {
            life: self.life / n,
            one_dead: self.one_dead / n,
            both_dead: self.both_dead / n,
        }
    }

    pub fn total(&self) -> u32 {
        self.life + self.one_dead + self.both_dead
    }
}

/// The raw tally of runs of exactly `n` stones of `player`.
///
/// Each run is found once from every stone it contains, so for runs short enough to be seen entirely
/// from each of their stones the counts are multiples of `n`.
pub fn line_tally(board: &GomokuBoard, player: Player, n: u32) -> LineStatus {
    let config = board.config();
    let mut tally = LineStatus::default();

    for square in config.squares() {
        if board.tile(square) != Some(player) {
            continue;
        }

        for dir in Direction::LINES {
            let mut count = 1;
            let mut blocked = [false; 2];

            for (side, dir) in [dir, dir.reverse()].into_iter().enumerate() {
                for steps in 1..=MAX_WALK {
                    match square.step(dir, steps, config.width(), config.height()) {
                        None => {
                            blocked[side] = true;
                            break;
                        }
                        Some(next) => match board.tile(next) {
                            Some(p) if p == player => count += 1,
                            Some(_) => {
                                blocked[side] = true;
                                break;
                            }
                            None => break,
                        },
                    }
                }
            }

            if count == n {
                match blocked {
                    [false, false] => tally.life += 1,
                    [true, true] => tally.both_dead += 1,
                    _ => tally.one_dead += 1,
                }
            }
        }
    }

    tally
}

/// The number of runs of exactly `n` stones of `player`, see [line_tally].
pub fn line_status(board: &GomokuBoard, player: Player, n: u32) -> LineStatus {
    line_tally(board, player, n).divided(n)
}

/// One entry in the scoring table, applied to the [LineStatus] for runs of `length` stones.
#[derive(Copy, Clone)]
enum Rule {
    /// Stop and return `score` if `when` holds.
    Exit {
        length: u32,
        when: fn(&LineStatus) -> bool,
        score: Value,
    },
    /// Add `score` to the running total.
    Add {
        length: u32,
        score: fn(&LineStatus) -> Value,
    },
}

impl Rule {
    fn length(&self) -> u32 {
        match *self {
            Rule::Exit { length, .. } | Rule::Add { length, .. } => length,
        }
    }
}

/// Evaluated top to bottom, rules for the same length are adjacent.
const RULES: &[Rule] = &[
    // five: only seen when open at both ends
    Rule::Exit {
        length: 5,
        when: |s| s.total() > 0,
        score: 1_000_000,
    },
    // four: open, or two with one open end
    Rule::Exit {
        length: 4,
        when: |s| s.life > 0 || s.one_dead > 1,
        score: 900_000,
    },
    Rule::Add {
        length: 4,
        score: |s| if s.one_dead == 1 { 10_000 } else { 0 },
    },
    Rule::Add {
        length: 4,
        score: |s| 100 * Value::from(s.both_dead),
    },
    // three: two open ones
    Rule::Exit {
        length: 3,
        when: |s| s.life > 1,
        score: 800_000,
    },
    Rule::Add {
        length: 3,
        score: |s| if s.life == 1 { 10_000 } else { 0 },
    },
    Rule::Add {
        length: 3,
        score: |s| 10 * Value::from(s.one_dead),
    },
    // two
    Rule::Add {
        length: 2,
        score: |s| 100 * Value::from(s.life),
    },
    Rule::Add {
        length: 2,
        score: |s| 10 * Value::from(s.one_dead),
    },
];

/// Estimate how good `board` is for `player`, based on the runs `player` has.
pub fn heuristic_score(board: &GomokuBoard, player: Player) -> Value {
    let mut total = 0;
    let mut status: Option<(u32, LineStatus)> = None;

    for rule in RULES {
        let length = rule.length();
        let curr = match status {
            Some((cached_length, s)) if cached_length == length => s,
            _ => {
                let s = line_status(board, player, length);
                status = Some((length, s));
                s
            }
        };

        match *rule {
            Rule::Exit { when, score, .. } => {
                if when(&curr) {
                    return score;
                }
            }
            Rule::Add { score, .. } => total += score(&curr),
        }
    }

    total
}

/// Score playing `square` on `board` for the player to move:
/// its own heuristic score minus [OPPONENT_WEIGHT] times the opponent's, both on the resulting board.
pub fn board_score(board: &GomokuBoard, square: Square) -> Result<Value, PlayError> {
    let mover = board.next_player();
    let next = board.with_stone(square, mover)?;
    Ok(heuristic_score(&next, mover) - OPPONENT_WEIGHT * heuristic_score(&next, mover.other()))
}

/// The [Heuristic] used to search gomoku boards.
///
/// Only squares next to an existing stone are expanded,
/// frontier moves are scored with [board_score] and done boards with their utility.
#[derive(Debug, Default, Copy, Clone)]
pub struct GomokuHeuristic;

impl Heuristic<GomokuBoard> for GomokuHeuristic {
    type V = Value;

    fn outcome_value(&self, board: &GomokuBoard, pov: Player) -> Value {
        board.utility_for(pov)
    }

    fn frontier_value(&self, board: &GomokuBoard, mv: Square) -> Result<Value, PlayError> {
        board_score(board, mv)
    }

    fn candidate_moves(&self, board: &GomokuBoard) -> Vec<Square> {
        board.neighbor_actions()
    }
}
