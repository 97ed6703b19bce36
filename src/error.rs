use derive_more::{Display, Error};

use crate::types::Coord;

/// Why a move was rejected. A rejected move leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("game is already over")]
    GameOver,

    #[display("cell {cell} is already occupied")]
    Occupied { cell: Coord },

    #[display("illegal move: {cell} does not flip any piece")]
    Illegal { cell: Coord },
}
