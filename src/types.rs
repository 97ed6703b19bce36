use std::fmt;
use std::ops::Neg;

use serde::Serialize;
use strum::EnumIter;

/// Number of cells along one edge of the board.
pub const BOARD_SIZE: usize = 8;
/// Number of cells on the board.
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Content of a single board cell.
///
/// Black and White are additive inverses so that the opponent of a color is
/// its negation; Empty sits at zero and never equals either of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Black = 1,
    White = -1,
}

impl Cell {
    /// Signed encoding: 0=empty, 1=black, -1=white.
    pub fn value(self) -> i8 {
        self as i8
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Signed encoding shared with [`Cell::value`].
    pub fn value(self) -> i8 {
        Cell::from(self).value()
    }

    pub fn opponent(self) -> Self {
        -self
    }
}

impl Neg for Player {
    type Output = Player;

    fn neg(self) -> Self::Output {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

/// A board coordinate, `(column, row)`, both in `0..8`.
///
/// Ordering is column-major, which keeps legal-move listings stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    /// Returns `None` when either component falls off the board.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        if col < BOARD_SIZE && row < BOARD_SIZE {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Row-major square index (0..=63).
    pub fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// The neighbouring coordinate one step towards `direction`, if on board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dc, dr) = direction.delta();
        let col = self.col as i8 + dc;
        let row = self.row as i8 + dr;
        if col < 0 || row < 0 {
            return None;
        }
        Self::new(col as usize, row as usize)
    }

    /// Iterates every coordinate of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..NUM_SQUARES).map(|idx| Coord {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        })
    }
}

/// Algebraic notation: column letter then 1-based row ("d3" is `(3, 2)`).
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.col) as char, self.row + 1)
    }
}

/// One of the eight compass directions used for ray scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Unit vector as `(d_col, d_row)`; rows grow southwards.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Final outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Black,
    White,
    Draw,
}

impl From<Player> for Outcome {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Outcome::Black,
            Player::White => Outcome::White,
        }
    }
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    /// Row-major cell values: 0=empty, 1=black, -1=white.
    pub board: Vec<i8>,
    pub current_player: Player,
    pub black_count: u8,
    pub white_count: u8,
    /// Move indicators for `current_player`.
    pub legal_moves: Vec<Coord>,
    pub is_game_over: bool,
    /// `None` while the game is still running.
    pub winner: Option<Outcome>,
    /// Contract:
    /// - `true` when the side that should have replied had no move and the
    ///   previous mover kept the turn.
    /// - `false` otherwise, including the initial position.
    pub passed: bool,
    /// Cells flipped by the last move; empty before the first move.
    pub flipped: Vec<Coord>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Outcome,
    pub black_count: u8,
    pub white_count: u8,
}
