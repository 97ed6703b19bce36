//! Othello (Reversi) engine compiled for the browser.
//!
//! The board is a row-major 8x8 grid and coordinates are `(column, row)`.
//! [`Game`] owns the position and the cached legal moves; [`wasm::WasmGame`]
//! exposes it to the page.

pub mod board;
pub mod error;
pub mod game;
pub mod layout;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::MoveError;
pub use game::Game;
pub use layout::Layout;
pub use types::{Cell, Coord, Direction, GameResult, GameState, Outcome, Player};
