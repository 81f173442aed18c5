// Input handling system
//
// Turns keyboard state into the discrete intents the character consumes.
//
// ## Architecture
//
// - `action`: Intents, controls and default key bindings
// - `buffer`: Per-tick intent queue (last writer wins per intent kind)
// - `controller`: Held-key tracking and per-tick intent polling
//
// ## Usage Example
//
// ```rust
// use engine::input::{IntentQueue, KeyboardController};
//
// let mut controller = KeyboardController::new();
// let mut queue = IntentQueue::new();
//
// // In your event loop, feed keyboard events
// controller.handle_key(KeyCode::ArrowRight, true);
//
// // Once per tick, queue the held intent and let the game drain it
// queue.push(controller.poll());
// let intents = queue.drain();
// ```

pub mod action;
pub mod buffer;
pub mod controller;

pub use action::{Control, Intent};
pub use buffer::IntentQueue;
pub use controller::KeyboardController;
