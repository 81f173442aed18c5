// Core geometry shared by the engine and the game

pub mod math;

pub use math::{Rect, Vector2i};
