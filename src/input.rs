//! Keyboard input: maps the four directional keys (arrows, WASD aliases)
//! onto grid directions. Polling is per render frame; the game core decides
//! what a press means (turn vs. restart).

use macroquad::input::{is_key_pressed, KeyCode};

use crate::types::Direction;

const KEY_BINDINGS: [(KeyCode, Direction); 8] = [
    (KeyCode::Up, Direction::Up),
    (KeyCode::Down, Direction::Down),
    (KeyCode::Left, Direction::Left),
    (KeyCode::Right, Direction::Right),
    (KeyCode::W, Direction::Up),
    (KeyCode::S, Direction::Down),
    (KeyCode::A, Direction::Left),
    (KeyCode::D, Direction::Right),
];

/// Map a key code to a movement direction, if it is bound to one.
pub fn map_key(code: KeyCode) -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|&(_, dir)| dir)
}

/// Poll this frame's directional key press, if any.
pub fn poll_direction() -> Option<Direction> {
    KEY_BINDINGS
        .iter()
        .find(|&&(code, _)| is_key_pressed(code))
        .map(|&(_, dir)| dir)
}
