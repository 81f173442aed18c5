// Static level geometry

use crate::engine::camera::ScrollController;
use crate::engine::physics::{Ground, StaticObstacle};

use super::config::GameConfig;

/// Ground plane plus the level's solid obstacles
///
/// Obstacles are kept in world coordinates and in a fixed order, which is
/// the order the collision resolver tests them in.
#[derive(Debug, Clone)]
pub struct Level {
    ground: Ground,
    obstacles: Vec<StaticObstacle>,
}

impl Level {
    pub fn new(ground: Ground, obstacles: Vec<StaticObstacle>) -> Self {
        Self { ground, obstacles }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(Ground::new(config.ground_level), config.obstacles.clone())
    }

    pub fn ground(&self) -> Ground {
        self.ground
    }

    /// Obstacles translated into screen space for the current scroll
    pub fn obstacles_on_screen(&self, camera: &ScrollController) -> Vec<StaticObstacle> {
        let offset = camera.screen_offset();
        self.obstacles.iter().map(|o| o.translate(offset)).collect()
    }
}
