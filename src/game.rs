use tracing::{debug, info, instrument};

use crate::board::{Board, Sandwiches};
use crate::error::MoveError;
use crate::types::{Coord, GameResult, GameState, Outcome, Player};

/// A running Othello game.
///
/// The legal-move set is cached for the side to move and rebuilt after
/// every board mutation. Game-over and the winner are derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    legal_moves: Sandwiches,
    passed: bool,
    flipped: Vec<Coord>,
}

impl Game {
    /// Starts from the initial position with Black to move.
    pub fn new() -> Self {
        Self::from_board(Board::new(), Player::Black)
    }

    /// Starts from an arbitrary position.
    ///
    /// If `to_move` has no legal move but the opponent does, the opponent
    /// takes the turn right away.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        let mut game = Self {
            board,
            current_player: to_move,
            legal_moves: Sandwiches::new(),
            passed: false,
            flipped: Vec::new(),
        };
        game.update_legal_moves();
        game
    }

    /// Puts the board back into the initial configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_cell_empty(&self, coord: Coord) -> bool {
        self.board.is_cell_empty(coord)
    }

    pub fn is_move_legal(&self, coord: Coord) -> bool {
        self.legal_moves.contains_key(&coord)
    }

    /// Coordinates the side to move may play, in column-major order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Coord> + '_ {
        self.legal_moves.keys().copied()
    }

    /// Cells that playing `coord` would flip, if it is a legal move.
    pub fn sandwich(&self, coord: Coord) -> Option<&[Coord]> {
        self.legal_moves.get(&coord).map(Vec::as_slice)
    }

    /// `true` when the last move left the opponent without a reply.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Cells flipped by the last move.
    pub fn flipped(&self) -> &[Coord] {
        &self.flipped
    }

    /// Puts a piece on `coord` without checking legality or flipping, then
    /// rebuilds the legal moves of the side to move.
    #[instrument(skip(self), fields(cell = %coord))]
    pub fn play_piece(&mut self, coord: Coord, player: Player) {
        self.board.play_piece(coord, player);
        self.update_legal_moves();
    }

    /// Plays `coord` for the side to move.
    ///
    /// Places the piece, flips its sandwiches and hands the turn over. The
    /// turn stays with the mover when the opponent has no reply.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] and leaves the game untouched when the game is
    /// over, the cell is taken, or the cell flips nothing.
    #[instrument(skip(self), fields(cell = %coord, player = ?self.current_player))]
    pub fn make_move(&mut self, coord: Coord) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_cell_empty(coord) {
            return Err(MoveError::Occupied { cell: coord });
        }
        let flips = self
            .legal_moves
            .remove(&coord)
            .ok_or(MoveError::Illegal { cell: coord })?;

        let player = self.current_player;
        self.board.play_piece(coord, player);
        for &cell in &flips {
            self.board.play_piece(cell, player);
        }
        debug!(flipped = flips.len(), "move applied");

        self.flipped = flips;
        self.current_player = player.opponent();
        self.update_legal_moves();

        Ok(())
    }

    /// Board full, or neither side can move.
    pub fn is_over(&self) -> bool {
        self.board.is_full() || self.legal_moves.is_empty()
    }

    /// `None` while the game is still running.
    pub fn winner(&self) -> Option<Outcome> {
        self.is_over().then(|| self.board.leader())
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            black_count,
            white_count,
            legal_moves: self.legal_moves().collect(),
            is_game_over: self.is_over(),
            winner: self.winner(),
            passed: self.passed,
            flipped: self.flipped.clone(),
        }
    }

    /// Final counts, available once the game is over.
    pub fn to_game_result(&self) -> Option<GameResult> {
        let winner = self.winner()?;
        let (black_count, white_count) = self.board.count();
        Some(GameResult {
            winner,
            black_count,
            white_count,
        })
    }

    fn update_legal_moves(&mut self) {
        self.passed = false;
        self.legal_moves = self.board.sandwiches(self.current_player);

        if self.legal_moves.is_empty() && !self.board.is_full() {
            let other = self.current_player.opponent();
            let other_moves = self.board.sandwiches(other);
            if !other_moves.is_empty() {
                debug!(skipped = ?self.current_player, "no legal move, turn passes");
                self.current_player = other;
                self.legal_moves = other_moves;
                self.passed = true;
            }
        }

        if let Some(winner) = self.winner() {
            let (black_count, white_count) = self.board.count();
            info!(?winner, black_count, white_count, "game over");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
