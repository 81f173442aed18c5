// Character system
//
// This module contains everything related to the playable character:
// - The actor itself: intents, motion and contact handling
// - Movement tuning
// - State machine for character behavior
// - Frame selection and mirroring for sprites

pub mod animation;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{CharacterStyle, FrameSet, FrameTable, SpriteFrame};
pub use character::Actor;
pub use state::CharacterState;
pub use stats::ActorStats;
