// Player intents and their default key bindings

use winit::keyboard::KeyCode;

/// Discrete player command delivered to the character once per occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    RunLeft,
    RunRight,
    Jump,
    Crouch,
    StopHorizontal,
}

/// Intents of the same kind replace each other within a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Run,
    Jump,
    Crouch,
    Stop,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Self::RunLeft | Self::RunRight => IntentKind::Run,
            Self::Jump => IntentKind::Jump,
            Self::Crouch => IntentKind::Crouch,
            Self::StopHorizontal => IntentKind::Stop,
        }
    }
}

/// Keyboard controls, including the ones that are not character intents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Up,
    Down,
    Pause,
}

/// Default bindings: arrow keys to move, Escape to pause
pub fn default_bindings() -> Vec<(KeyCode, Control)> {
    vec![
        (KeyCode::ArrowLeft, Control::Left),
        (KeyCode::ArrowRight, Control::Right),
        (KeyCode::ArrowUp, Control::Up),
        (KeyCode::ArrowDown, Control::Down),
        (KeyCode::Escape, Control::Pause),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_intents_share_a_kind() {
        assert_eq!(Intent::RunLeft.kind(), Intent::RunRight.kind());
        assert_ne!(Intent::Jump.kind(), Intent::Crouch.kind());
        assert_eq!(Intent::StopHorizontal.kind(), IntentKind::Stop);
    }

    #[test]
    fn test_no_duplicate_keys_in_default_bindings() {
        let bindings = default_bindings();
        let mut seen = std::collections::HashSet::new();
        for (key, _) in bindings {
            assert!(seen.insert(key), "Duplicate key in default bindings");
        }
    }

    #[test]
    fn test_escape_pauses() {
        assert!(default_bindings()
            .iter()
            .any(|(key, control)| *key == KeyCode::Escape && *control == Control::Pause));
    }
}
