use crate::core::{Rect, Vector2i};

/// Position, velocity and acceleration of one rectangular actor
///
/// Integration is explicit Euler on integers: the rect moves by the current
/// velocity, then the velocity picks up the acceleration. Nothing here clamps
/// or collides; that is the collision resolver's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KinematicBody {
    pub rect: Rect,
    pub velocity: Vector2i,
    pub acceleration: Vector2i,
}

impl KinematicBody {
    /// Create a body at rest
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            velocity: Vector2i::ZERO,
            acceleration: Vector2i::ZERO,
        }
    }

    /// The body one tick later
    #[must_use]
    pub fn integrate(self) -> Self {
        Self {
            rect: self.rect.translate(self.velocity),
            velocity: self.velocity + self.acceleration,
            acceleration: self.acceleration,
        }
    }

    /// Advance this body by one tick in place
    pub fn step(&mut self) {
        *self = self.integrate();
    }
}
