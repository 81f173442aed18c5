// Keyboard state to per-tick intents

use super::action::{default_bindings, Control, Intent};
use std::collections::{HashMap, HashSet};
use winit::keyboard::KeyCode;

/// Tracks held keys and turns them into one intent per tick
///
/// Polling is level-triggered: every tick the highest-priority held control
/// produces its intent (right, left, up, down), and nothing held means stop.
#[derive(Debug)]
pub struct KeyboardController {
    bindings: HashMap<KeyCode, Control>,
    held: HashSet<Control>,
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardController {
    /// Create a controller with the default arrow-key bindings
    pub fn new() -> Self {
        Self::from_bindings(default_bindings())
    }

    pub fn from_bindings(bindings: Vec<(KeyCode, Control)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            held: HashSet::new(),
        }
    }

    /// Feed a key event; returns the control that was freshly pressed, if any
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> Option<Control> {
        let control = *self.bindings.get(&key)?;
        if pressed {
            self.held.insert(control).then_some(control)
        } else {
            self.held.remove(&control);
            None
        }
    }

    pub fn is_held(&self, control: Control) -> bool {
        self.held.contains(&control)
    }

    /// Intent for the current tick
    pub fn poll(&self) -> Intent {
        if self.is_held(Control::Right) {
            Intent::RunRight
        } else if self.is_held(Control::Left) {
            Intent::RunLeft
        } else if self.is_held(Control::Up) {
            Intent::Jump
        } else if self.is_held(Control::Down) {
            Intent::Crouch
        } else {
            Intent::StopHorizontal
        }
    }

    /// Forget every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}
