//! Fixed-size board of cell colors.
//!
//! Cells are stored as `cells[column][row]`. The board is `Copy`, so every
//! hypothetical placement is made on its own value and never aliases the
//! board it was derived from.

use std::fmt;
use std::str::FromStr;

use crate::constants::{GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, HEIGHT, WIDTH};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    Empty,
    White,
    Black,
}

impl Color {
    /// The other player.
    ///
    /// # Panics
    /// Panics on [`Color::Empty`]: only the two players can be inverted.
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Empty => panic!("cannot invert a non-player color: {self:?}"),
        }
    }

    pub fn is_stone(self) -> bool {
        self != Color::Empty
    }

    pub fn glyph(self) -> char {
        match self {
            Color::White => GLYPH_WHITE,
            Color::Black => GLYPH_BLACK,
            Color::Empty => GLYPH_EMPTY,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
            Color::Empty => write!(f, "Empty"),
        }
    }
}

/// A `(column, row)` coordinate.
pub type Point = (usize, usize);

/// Error returned when a board layout string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// Layout does not have exactly `WIDTH` lines
    LineCount(usize),
    /// A line does not have exactly `HEIGHT` cells
    LineLength { line: usize, len: usize },
    /// Character is not a stone or empty marker
    Glyph(char),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::LineCount(n) => {
                write!(f, "expected {WIDTH} lines in board layout, got {n}")
            }
            ParseBoardError::LineLength { line, len } => {
                write!(f, "line {line} of board layout has {len} cells, expected {HEIGHT}")
            }
            ParseBoardError::Glyph(c) => write!(f, "unknown board glyph {c:?}"),
        }
    }
}

impl std::error::Error for ParseBoardError {}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Color; HEIGHT]; WIDTH],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_board((x, y): Point) -> bool {
        x < WIDTH && y < HEIGHT
    }

    pub fn get(&self, (x, y): Point) -> Color {
        self.cells[x][y]
    }

    pub fn set(&mut self, (x, y): Point, color: Color) {
        self.cells[x][y] = color;
    }

    /// All points, column-major then row, ascending.
    pub fn points() -> impl Iterator<Item = Point> {
        (0..WIDTH).flat_map(|x| (0..HEIGHT).map(move |y| (x, y)))
    }

    /// The 4-connected neighbors of `(x, y)` that lie on the board.
    pub fn neighbors((x, y): Point) -> impl Iterator<Item = Point> {
        let candidates = [
            (x.checked_sub(1), Some(y)),
            (Some(x + 1), Some(y)),
            (Some(x), y.checked_sub(1)),
            (Some(x), Some(y + 1)),
        ];
        candidates.into_iter().filter_map(|c| match c {
            (Some(nx), Some(ny)) if Board::on_board((nx, ny)) => Some((nx, ny)),
            _ => None,
        })
    }

    pub fn stone_count(&self) -> usize {
        Board::points().filter(|&p| self.get(p).is_stone()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.stone_count() == 0
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in &self.cells {
            for cell in column {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse the rendered form back into a board.
///
/// Lines are separated by newlines or `/`; `.` is accepted as empty.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .split(['\n', '/'])
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.len() != WIDTH {
            return Err(ParseBoardError::LineCount(lines.len()));
        }

        let mut board = Board::new();
        for (x, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != HEIGHT {
                return Err(ParseBoardError::LineLength { line: x, len });
            }
            for (y, c) in line.chars().enumerate() {
                let color = match c.to_ascii_uppercase() {
                    GLYPH_WHITE => Color::White,
                    GLYPH_BLACK => Color::Black,
                    GLYPH_EMPTY | '.' => Color::Empty,
                    other => return Err(ParseBoardError::Glyph(other)),
                };
                board.set((x, y), color);
            }
        }
        Ok(board)
    }
}
