// Kinematic physics: integer integration and axis-separated collision

pub mod body;
pub mod collision;

pub use body::KinematicBody;
pub use collision::{resolve, ContactFlags, Ground, ObstacleKind, StaticObstacle};
