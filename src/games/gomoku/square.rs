use std::fmt::{Debug, Display, Formatter};

/// A coordinate on a gomoku board, `x` indexes the columns and `y` the rows.
///
/// Squares are ordered by `x` first and `y` second.
/// This is the order in which moves are generated and tried by the search.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Square {
    x: u8,
    y: u8,
}

/// One of the 8 compass directions, as a unit step `(dx, dy)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Direction { dx, dy }
    }

    /// The 4 undirected lines, each represented by one of its two directions.
    pub const LINES: [Direction; 4] = [
        Direction::new(0, 1),
        Direction::new(1, 0),
        Direction::new(1, 1),
        Direction::new(1, -1),
    ];

    /// All 8 neighbouring offsets.
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    pub fn reverse(self) -> Direction {
        Direction::new(-self.dx, -self.dy)
    }
}

impl Square {
    pub const fn new(x: u8, y: u8) -> Self {
        Square { x, y }
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    /// The square `steps` steps away in `dir`, if it exists on a `width` x `height` board.
    pub fn step(self, dir: Direction, steps: i16, width: u8, height: u8) -> Option<Square> {
        let x = self.x as i16 + dir.dx as i16 * steps;
        let y = self.y as i16 + dir.dy as i16 * steps;
        if (0..width as i16).contains(&x) && (0..height as i16).contains(&y) {
            Some(Square::new(x as u8, y as u8))
        } else {
            None
        }
    }

    pub fn diagonal_distance(self, other: Square) -> u8 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}

impl From<(u8, u8)> for Square {
    fn from((x, y): (u8, u8)) -> Self {
        Square::new(x, y)
    }
}

impl Debug for Square {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Square({}, {})", self.x, self.y)
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
