// Game layer: the character, the level and the per-tick orchestration

pub mod characters;
pub mod config;
pub mod level;
pub mod world;

pub use config::GameConfig;
pub use world::{Game, TickReport};
