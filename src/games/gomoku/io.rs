use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;
use nom::Finish;

use crate::board::{Board, Player};
use crate::games::gomoku::{GameConfig, GomokuBoard, Square};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidDiagram {
    pub diagram: String,
    pub reason: &'static str,
}

type Rows = Vec<Vec<Option<Player>>>;

mod parse {
    use nom::character::complete::{char, digit1, one_of};
    use nom::combinator::{eof, map, map_res};
    use nom::multi::{many1, separated_list1};
    use nom::sequence::{preceded, terminated, tuple};
    use nom::IResult;

    use super::*;

    fn tile(input: &str) -> IResult<&str, Option<Player>> {
        map(one_of("xo."), Player::from_char)(input)
    }

    fn rows(input: &str) -> IResult<&str, Rows> {
        separated_list1(char('/'), many1(tile))(input)
    }

    fn player(input: &str) -> IResult<&str, Player> {
        map(one_of("xo"), |c| match c {
            'x' => Player::A,
            'o' => Player::B,
            _ => unreachable!(),
        })(input)
    }

    fn run_length(input: &str) -> IResult<&str, u8> {
        map_res(digit1, str::parse::<u8>)(input)
    }

    pub(super) fn diagram(input: &str) -> IResult<&str, (Rows, Player, u8)> {
        terminated(
            tuple((
                rows,
                preceded(char(' '), player),
                preceded(char(' '), run_length),
            )),
            eof,
        )(input)
    }
}

impl GomokuBoard {
    /// Parse a board from a diagram of the form `<rows> <next> <k>`, for example `"x../.o./... x 3"`.
    ///
    /// Rows are separated by `/`, row `y` lists the tiles for `x = 0..width` as `x`, `o` or `.`.
    /// `<next>` is the player to move and `<k>` the run length needed to win.
    pub fn from_diagram(diagram: &str) -> Result<GomokuBoard, InvalidDiagram> {
        let err = |reason| InvalidDiagram {
            diagram: diagram.to_owned(),
            reason,
        };

        let (_, (rows, next_player, k)) = parse::diagram(diagram)
            .finish()
            .map_err(|_| err("Expected '<rows> <next> <k>' with rows of 'x', 'o' and '.'"))?;

        let width = rows[0].len();
        if rows.iter().any(|row| row.len() != width) {
            return Err(err("Rows have different lengths"));
        }
        let height = u8::try_from(rows.len()).map_err(|_| err("Too many rows"))?;
        let width = u8::try_from(width).map_err(|_| err("Too many columns"))?;

        let config = GameConfig::new(height, width, k).map_err(|e| err(e.reason))?;
        let tiles = rows.into_iter().flatten().collect_vec();

        GomokuBoard::from_parts(config, tiles, next_player).ok_or_else(|| err("Both players have a winning run"))
    }

    pub fn to_diagram(&self) -> String {
        let config = self.config();
        let rows = (0..config.height())
            .map(|y| {
                (0..config.width())
                    .map(|x| tile_to_char(self.tile(Square::new(x, y))))
                    .collect::<String>()
            })
            .join("/");

        format!("{} {} {}", rows, self.next_player().to_char(), config.k())
    }
}

fn tile_to_char(tile: Option<Player>) -> char {
    tile.map_or('.', Player::to_char)
}

impl Debug for GomokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "GomokuBoard(\"{}\")", self.to_diagram())
    }
}

impl Display for GomokuBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let config = self.config();

        write!(f, "   ")?;
        for x in 0..config.width() {
            write!(f, "{}", x % 10)?;
        }
        writeln!(f)?;

        for y in 0..config.height() {
            write!(f, "{:>2} ", y)?;
            for x in 0..config.width() {
                write!(f, "{}", tile_to_char(self.tile(Square::new(x, y))))?;
            }
            if y == config.height() / 2 {
                write!(f, "    {}  k={}", self.next_player().to_char(), config.k())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Display for InvalidDiagram {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid diagram {:?}: {}", self.diagram, self.reason)
    }
}

impl std::error::Error for InvalidDiagram {}
