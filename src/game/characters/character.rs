// The playable character: intents in, motion and contacts out

use crate::core::Rect;
use crate::engine::input::Intent;
use crate::engine::physics::{resolve, ContactFlags, Ground, KinematicBody, StaticObstacle};
use crate::game::config::ConfigError;

use super::animation::{AnimationCycler, FrameSet, SpriteFrame};
use super::state::{CharacterState, CharacterStateMachine};
use super::stats::ActorStats;

/// Direction the character faces; frames are mirrored when facing left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left
    pub fn sign(&self) -> i32 {
        match self {
            Self::Right => 1,
            Self::Left => -1,
        }
    }
}

/// Player-controlled character
///
/// Intents change state and velocity immediately; `update` then integrates,
/// resolves collisions and lets the contact flags drive landing and falling.
/// Guard failures (jumping in mid-air, crouching while airborne) are ignored.
#[derive(Debug)]
pub struct Actor {
    body: KinematicBody,
    state_machine: CharacterStateMachine,
    facing: Facing,
    /// Supported by the ground or a block as of the last resolution
    grounded: bool,
    stats: ActorStats,
    animation: AnimationCycler,
}

impl Actor {
    /// Create a stopped, right-facing actor at `rect`, assumed to be resting
    /// until the first update says otherwise
    pub fn new(rect: Rect, stats: ActorStats, frames: FrameSet) -> Result<Self, ConfigError> {
        let animation = AnimationCycler::new(frames, stats.leg_cadence)?;
        Ok(Self {
            body: KinematicBody::new(rect),
            state_machine: CharacterStateMachine::new(),
            facing: Facing::Right,
            grounded: true,
            stats,
            animation,
        })
    }

    /// Apply one intent from the input queue
    pub fn apply_intent(&mut self, intent: Intent) {
        match intent {
            Intent::RunLeft => self.run(Facing::Left),
            Intent::RunRight => self.run(Facing::Right),
            Intent::Jump => self.jump(),
            Intent::Crouch => self.crouch(),
            Intent::StopHorizontal => self.stop(),
        }
    }

    /// Run in a direction; in mid-air only part of the run speed applies
    pub fn run(&mut self, direction: Facing) {
        self.facing = direction;
        if self.state().is_airborne() {
            self.body.velocity.x = self.stats.air_run_speed() * direction.sign();
        } else if self.can_act_on_ground() {
            self.state_machine.transition(CharacterState::Running);
            self.body.velocity.x = self.stats.run_speed * direction.sign();
        }
    }

    pub fn jump(&mut self) {
        if !self.state().can_jump() || !self.can_act_on_ground() {
            return;
        }
        self.state_machine.transition(CharacterState::Jumping);
        self.body.velocity.y = -self.stats.jump_speed;
        self.body.acceleration.y = self.stats.gravity;
        self.grounded = false;
    }

    pub fn crouch(&mut self) {
        if !self.can_act_on_ground() {
            return;
        }
        self.state_machine.transition(CharacterState::Crouching);
        self.body.velocity.x = 0;
    }

    pub fn stop(&mut self) {
        if !self.state().can_stop() || !self.can_act_on_ground() {
            return;
        }
        self.state_machine.transition(CharacterState::Stopped);
        self.body.velocity.x = 0;
    }

    /// Advance one tick against `obstacles` (screen space) and the ground
    pub fn update(&mut self, obstacles: &[StaticObstacle], ground: Ground) -> ContactFlags {
        let pre = self.body.rect;
        self.body.step();

        let resolution = resolve(pre, self.body.rect, self.body.velocity, obstacles, ground);
        self.body.rect = resolution.rect;
        self.body.velocity = resolution.velocity;
        self.apply_contacts(resolution.contacts);

        self.state_machine.tick();
        self.animation.advance(self.state());
        resolution.contacts
    }

    /// Interpret contact flags: land, keep resting, or start falling
    fn apply_contacts(&mut self, contacts: ContactFlags) {
        if contacts.head_bump {
            log::debug!("Head bump at {:?}", self.body.rect);
        }
        if contacts.blocked_left || contacts.blocked_right {
            log::trace!("Blocked sideways at {:?}", self.body.rect);
        }

        if self.state().is_airborne() {
            if contacts.landed {
                self.land();
            }
        } else if contacts.grounded {
            self.body.velocity.y = 0;
            self.body.acceleration.y = 0;
        } else {
            // Walked off an edge
            self.state_machine.transition(CharacterState::Jumping);
            self.body.acceleration.y = self.stats.gravity;
        }

        self.grounded = !self.state().is_airborne();
    }

    fn land(&mut self) {
        log::debug!(
            "Landed at {} after {} airborne ticks",
            self.body.rect.mid_bottom(),
            self.state_machine.ticks_in_state()
        );
        self.body.velocity.y = 0;
        self.body.acceleration.y = 0;
        let next = if self.body.velocity.x != 0 {
            CharacterState::Running
        } else {
            CharacterState::Stopped
        };
        self.state_machine.transition(next);
    }

    /// Grounded guard shared by the on-ground intents
    fn can_act_on_ground(&self) -> bool {
        self.grounded && self.body.velocity.y == 0
    }

    pub fn state(&self) -> CharacterState {
        self.state_machine.state()
    }

    pub fn rect(&self) -> Rect {
        self.body.rect
    }

    /// Mutable rect, for the camera's recentring and left-edge clamp
    pub fn rect_mut(&mut self) -> &mut Rect {
        &mut self.body.rect
    }

    /// Frame to draw, already mirrored for the facing direction
    pub fn current_frame(&self) -> &SpriteFrame {
        self.animation.current_frame(self.facing)
    }
}
