//! Browser-facing wrapper around [`Game`].
//!
//! The page owns one `WasmGame`, forwards pointer events to it and redraws
//! from the snapshots it returns.

use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::layout::Layout;
use crate::types::Coord;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
    layout: Layout,
}

#[wasm_bindgen]
impl WasmGame {
    /// `layout` is `{ width, height }` in pixels; `undefined` uses defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(layout: JsValue) -> Result<WasmGame, JsError> {
        let layout = if layout.is_undefined() || layout.is_null() {
            Layout::default()
        } else {
            serde_wasm_bindgen::from_value(layout)?
        };

        Ok(Self {
            game: Game::new(),
            layout,
        })
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }

    /// Plays the cell at `(col, row)` for the side to move.
    /// Returns `false` when the selection was ignored.
    #[wasm_bindgen(js_name = selectCell)]
    pub fn select_cell(&mut self, col: usize, row: usize) -> bool {
        match Coord::new(col, row) {
            Some(coord) => self.play(coord),
            None => {
                debug!(col, row, "selection off the board");
                false
            }
        }
    }

    /// Plays the cell under the pointer position `(x, y)`.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        match self.layout.cell_at(x, y) {
            Some(coord) => self.play(coord),
            None => false,
        }
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_over()
    }

    /// Snapshot of the board, counts, indicators and status.
    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        let moves: Vec<Coord> = self.game.legal_moves().collect();
        Ok(serde_wasm_bindgen::to_value(&moves)?)
    }

    /// Final result, or `undefined` while the game is running.
    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_result())?)
    }
}

impl WasmGame {
    fn play(&mut self, coord: Coord) -> bool {
        if !self.game.is_cell_empty(coord) || !self.game.is_move_legal(coord) {
            debug!(cell = %coord, "selection ignored");
            return false;
        }
        match self.game.make_move(coord) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "move rejected");
                false
            }
        }
    }
}
