//! Retro Snake: a single-screen arcade snake on macroquad.
//!
//! The `core`, `types`, and `timing` modules hold the game rules and are
//! free of rendering, audio, and input dependencies; `assets`, `render`,
//! `input`, and the binary supply the presentation on top of macroquad.

pub mod assets;
pub mod core;
pub mod input;
pub mod render;
pub mod timing;
pub mod types;
