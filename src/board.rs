use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use strum::IntoEnumIterator;

use crate::types::{BOARD_SIZE, Cell, Coord, Direction, NUM_SQUARES, Outcome, Player};

/// Cells that would be flipped, keyed by the empty cell that captures them.
pub type Sandwiches = BTreeMap<Coord, Vec<Coord>>;

/// Othello board state stored as a row-major 8x8 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e5=white, d5=black, e4=black.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (col, row, player) in [
            (3, 3, Player::White),
            (4, 4, Player::White),
            (3, 4, Player::Black),
            (4, 3, Player::Black),
        ] {
            board.play_piece(at(col, row), player);
        }
        board
    }

    /// Creates a board with no pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    pub fn is_cell_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Puts a piece on `coord` without checking legality or flipping.
    pub fn play_piece(&mut self, coord: Coord, player: Player) {
        self.cells[coord.row()][coord.col()] = player.into();
    }

    /// Returns the rows of the grid, top row first.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        self.cells
            .iter()
            .flatten()
            .fold((0, 0), |(black, white), cell| match cell {
                Cell::Black => (black + 1, white),
                Cell::White => (black, white + 1),
                Cell::Empty => (black, white),
            })
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        let (black_count, white_count) = self.count();
        NUM_SQUARES as u8 - black_count - white_count
    }

    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Strict piece majority, `Draw` on equal counts.
    pub fn leader(&self) -> Outcome {
        let (black_count, white_count) = self.count();
        match black_count.cmp(&white_count) {
            std::cmp::Ordering::Greater => Outcome::Black,
            std::cmp::Ordering::Less => Outcome::White,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }

    /// Converts board to `[i8; 64]` where 0=empty, 1=black, -1=white.
    pub fn to_array(&self) -> [i8; NUM_SQUARES] {
        let mut board = [0i8; NUM_SQUARES];
        for coord in Coord::all() {
            board[coord.index()] = self.get(coord).value();
        }
        board
    }

    /// Opponent pieces captured from `coord` in one direction.
    ///
    /// The run must start right next to `coord` and be closed by a piece of
    /// `player`; a run that reaches an empty cell or the edge captures
    /// nothing.
    pub fn sandwich_toward(
        &self,
        coord: Coord,
        player: Player,
        direction: Direction,
    ) -> Vec<Coord> {
        let mut run = Vec::new();
        let mut next = coord.step(direction);

        while let Some(cell) = next {
            let value = self.get(cell).value();
            if value == player.value() {
                return run;
            }
            if value != -player.value() {
                break;
            }
            run.push(cell);
            next = cell.step(direction);
        }

        Vec::new()
    }

    /// Union of the sandwiches in all eight directions.
    pub fn cell_sandwiches(&self, coord: Coord, player: Player) -> Vec<Coord> {
        Direction::iter()
            .flat_map(|direction| self.sandwich_toward(coord, player, direction))
            .collect()
    }

    /// Empty cells touching at least one piece.
    pub fn surrounding_cells(&self) -> BTreeSet<Coord> {
        Coord::all()
            .filter(|&coord| !self.is_cell_empty(coord))
            .flat_map(|coord| Direction::iter().filter_map(move |dir| coord.step(dir)))
            .filter(|&neighbor| self.is_cell_empty(neighbor))
            .collect()
    }

    /// Legal moves for `player`, each mapped to the cells it flips.
    pub fn sandwiches(&self, player: Player) -> Sandwiches {
        self.surrounding_cells()
            .into_iter()
            .filter_map(|coord| {
                let flips = self.cell_sandwiches(coord, player);
                (!flips.is_empty()).then_some((coord, flips))
            })
            .collect()
    }

    /// Parses an 8-line diagram of `.`, `B` and `W`, top row first.
    #[cfg(test)]
    pub(crate) fn from_diagram(diagram: &str) -> Self {
        let mut board = Self::empty();
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(rows.len(), BOARD_SIZE, "diagram needs {BOARD_SIZE} rows");

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(symbols.len(), BOARD_SIZE, "row {row} needs {BOARD_SIZE} cells");
            for (col, symbol) in symbols.into_iter().enumerate() {
                match symbol {
                    'B' => board.play_piece(at(col, row), Player::Black),
                    'W' => board.play_piece(at(col, row), Player::White),
                    '.' => {}
                    other => panic!("unexpected diagram symbol {other:?}"),
                }
            }
        }

        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the same diagram format used to build test positions.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn at(col: usize, row: usize) -> Coord {
    match Coord::new(col, row) {
        Some(coord) => coord,
        None => unreachable!("fixed coordinate ({col}, {row}) is on the board"),
    }
}
