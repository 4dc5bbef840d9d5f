//! Core module - pure game rules with no rendering, audio, or input
//! dependencies. Randomness comes in through `rand::Rng` parameters so
//! everything here runs deterministically under test.

pub mod food;
pub mod game;
pub mod snake;

pub use food::Food;
pub use game::Game;
pub use snake::Snake;
