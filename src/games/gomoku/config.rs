use std::fmt::{Display, Formatter};

use crate::games::gomoku::{Square, Value};

/// The fixed parameters of a game: board dimensions and the run length `k` needed to win.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GameConfig {
    height: u8,
    width: u8,
    k: u8,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidConfig {
    pub reason: &'static str,
}

impl GameConfig {
    /// The largest `k` for which the win utility `1000^(k+1)` still fits in a [Value].
    pub const MAX_K: u8 = 11;

    pub fn new(height: u8, width: u8, k: u8) -> Result<GameConfig, InvalidConfig> {
        let err = |reason| Err(InvalidConfig { reason });

        if height == 0 || width == 0 {
            return err("Board dimensions must be at least 1");
        }
        if k == 0 {
            return err("Run length k must be at least 1");
        }
        if k > Self::MAX_K {
            return err("Run length k is too large for the win utility");
        }

        Ok(GameConfig { height, width, k })
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn k(&self) -> u8 {
        self.k
    }

    /// The number of squares on the board.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, square: Square) -> bool {
        square.x() < self.width && square.y() < self.height
    }

    /// The square the very first move is placed next to.
    pub fn center(&self) -> Square {
        Square::new(self.width / 2, self.height / 2)
    }

    /// All squares on the board, in ascending [Square] order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| Square::new(x, y)))
    }

    /// The dense index of `square`, used for tile storage.
    pub fn index(&self, square: Square) -> usize {
        debug_assert!(self.contains(square));
        square.y() as usize * self.width as usize + square.x() as usize
    }

    /// The utility of a won board for the winner, `1000^(k+1)`.
    pub fn win_utility(&self) -> Value {
        Value::from(1000u16).pow(self.k as u32 + 1)
    }
}

impl Default for GameConfig {
    /// A 16x16 board with five in a row to win.
    fn default() -> Self {
        GameConfig {
            height: 16,
            width: 16,
            k: 5,
        }
    }
}

impl Display for InvalidConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid game config: {}", self.reason)
    }
}

impl std::error::Error for InvalidConfig {}
