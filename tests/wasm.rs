#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Object, Reflect};
use othello::wasm::WasmGame;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(obj: &JsValue, name: &str) -> JsValue {
    Reflect::get(obj, &JsValue::from_str(name)).unwrap()
}

fn new_game(layout: JsValue) -> WasmGame {
    WasmGame::new(layout).unwrap_or_else(|_| panic!("layout rejected"))
}

fn state(game: &WasmGame) -> JsValue {
    game.state().unwrap_or_else(|_| panic!("state not serializable"))
}

#[wasm_bindgen_test]
fn initial_state_crosses_the_boundary() {
    let game = new_game(JsValue::UNDEFINED);
    let state = state(&game);

    assert_eq!(field(&state, "current_player").as_string().as_deref(), Some("Black"));
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(Array::from(&field(&state, "board")).length(), 64);
    assert_eq!(Array::from(&field(&state, "legal_moves")).length(), 4);
    assert!(field(&state, "winner").is_undefined());
}

#[wasm_bindgen_test]
fn click_plays_the_cell_under_the_pointer() {
    let layout = Object::new();
    Reflect::set(&layout, &"width".into(), &800.0.into()).unwrap();
    Reflect::set(&layout, &"height".into(), &800.0.into()).unwrap();
    let mut game = new_game(layout.into());

    // (350, 250) is column 3, row 2.
    assert!(game.click(350.0, 250.0));
    assert!(!game.click(350.0, 250.0));

    let state = state(&game);
    assert_eq!(field(&state, "current_player").as_string().as_deref(), Some("White"));
    assert_eq!(Array::from(&field(&state, "flipped")).length(), 1);
}

#[wasm_bindgen_test]
fn illegal_selections_are_ignored() {
    let mut game = new_game(JsValue::NULL);

    assert!(!game.select_cell(0, 0));
    assert!(!game.select_cell(3, 3));
    assert!(!game.select_cell(9, 0));
    assert!(game.select_cell(2, 3));
    assert!(!game.is_game_over());
    assert!(game.result().unwrap_or_else(|_| panic!("result")).is_undefined());
}
