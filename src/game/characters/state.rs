// Character state machine

/// Represents the current state of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CharacterState {
    /// Standing still on a surface
    #[default]
    Stopped,
    /// Moving horizontally on a surface
    Running,
    /// Airborne, whether rising from a jump or falling off an edge
    Jumping,
    /// Crouching on a surface
    Crouching,
}

impl CharacterState {
    pub const ALL: [CharacterState; 4] = [
        CharacterState::Stopped,
        CharacterState::Running,
        CharacterState::Jumping,
        CharacterState::Crouching,
    ];

    /// Dense index, used to key per-state tables
    pub fn index(&self) -> usize {
        match self {
            Self::Stopped => 0,
            Self::Running => 1,
            Self::Jumping => 2,
            Self::Crouching => 3,
        }
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, Self::Jumping)
    }

    /// Jumping is only allowed from these states (when grounded)
    pub fn can_jump(&self) -> bool {
        matches!(self, Self::Stopped | Self::Running)
    }

    /// Stopping only applies to states with something to stop
    pub fn can_stop(&self) -> bool {
        matches!(self, Self::Running | Self::Crouching)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Jumping => "jumping",
            Self::Crouching => "crouching",
        }
    }
}

/// Holds the single active state and how long it has been active
#[derive(Debug)]
pub struct CharacterStateMachine {
    current_state: CharacterState,
    ticks_in_state: u64,
}

impl Default for CharacterStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: CharacterState::Stopped,
            ticks_in_state: 0,
        }
    }

    pub fn state(&self) -> CharacterState {
        self.current_state
    }

    pub fn ticks_in_state(&self) -> u64 {
        self.ticks_in_state
    }

    /// Transition to a new state; returns whether anything changed
    pub fn transition(&mut self, new_state: CharacterState) -> bool {
        if self.current_state == new_state {
            return false;
        }
        log::debug!(
            "Character state {} -> {}",
            self.current_state.name(),
            new_state.name()
        );
        self.current_state = new_state;
        self.ticks_in_state = 0;
        true
    }

    /// Count one tick in the current state
    pub fn tick(&mut self) {
        self.ticks_in_state += 1;
    }
}
