// Static world configuration and its start-up validation

use crate::core::{Rect, Vector2i};
use crate::engine::physics::{ObstacleKind, StaticObstacle};

use super::characters::{ActorStats, CharacterState, CharacterStyle};

/// Configuration problems, all detected before the first tick
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("No frames configured for state {0:?}")]
    EmptyFrames(CharacterState),

    #[error("Animation cadence must be at least one tick")]
    ZeroCadence,

    #[error("Viewport has no area: {0:?}")]
    DegenerateViewport(Rect),

    #[error("Ground level {level} is outside the viewport")]
    GroundOutsideViewport { level: i32 },

    #[error("Obstacle {index} has no area: {rect:?}")]
    DegenerateObstacle { index: usize, rect: Rect },

    #[error("Backdrop period must be positive, got {0}")]
    BackdropPeriod(i32),

    #[error("Start position {0} is outside the viewport")]
    StartOutsideViewport(Vector2i),

    #[error("Start position {start} is below the ground level {level}")]
    StartBelowGround { start: Vector2i, level: i32 },

    #[error("Start position {start} puts the character inside obstacle {index}")]
    StartInsideObstacle { start: Vector2i, index: usize },

    #[error("Stat {name} must be positive, got {value}")]
    NonPositiveStat { name: &'static str, value: i32 },

    #[error("Air control must be within 0..=100 percent, got {0}")]
    AirControl(i32),
}

/// World layout and character tuning, supplied once at start-up
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Visible window, in screen coordinates
    pub viewport: Rect,
    /// Y coordinate of the ground surface
    pub ground_level: i32,
    /// Mid-bottom anchor of the character at start
    pub start: Vector2i,
    /// Width of one backdrop tile
    pub backdrop_period: i32,
    pub style: CharacterStyle,
    pub stats: ActorStats,
    /// Obstacles in world coordinates, in collision test order
    pub obstacles: Vec<StaticObstacle>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport: Rect::new(0, 0, 600, 337),
            ground_level: 293,
            start: Vector2i::new(50, 293),
            backdrop_period: 600,
            style: CharacterStyle::Big,
            stats: ActorStats::default(),
            obstacles: vec![StaticObstacle::new(
                ObstacleKind::LuckyBlock,
                Rect::from_mid_bottom(Vector2i::new(300, 210), 16, 16),
            )],
        }
    }
}

impl GameConfig {
    /// Reject anything the tick loop cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let viewport = self.viewport;
        if viewport.is_degenerate() {
            return Err(ConfigError::DegenerateViewport(viewport));
        }
        if self.ground_level <= viewport.top() || self.ground_level > viewport.bottom() {
            return Err(ConfigError::GroundOutsideViewport {
                level: self.ground_level,
            });
        }
        if self.backdrop_period <= 0 {
            return Err(ConfigError::BackdropPeriod(self.backdrop_period));
        }
        if let Some((index, obstacle)) = self
            .obstacles
            .iter()
            .enumerate()
            .find(|(_, o)| o.rect.is_degenerate())
        {
            return Err(ConfigError::DegenerateObstacle {
                index,
                rect: obstacle.rect,
            });
        }

        if self.start.x < viewport.left() || self.start.x >= viewport.right() {
            return Err(ConfigError::StartOutsideViewport(self.start));
        }
        if self.start.y > self.ground_level {
            return Err(ConfigError::StartBelowGround {
                start: self.start,
                level: self.ground_level,
            });
        }
        let start_rect = self.start_rect();
        if let Some(index) = self
            .obstacles
            .iter()
            .position(|o| o.rect.intersects(&start_rect))
        {
            return Err(ConfigError::StartInsideObstacle {
                start: self.start,
                index,
            });
        }

        let stats = &self.stats;
        for (name, value) in [
            ("run_speed", stats.run_speed),
            ("jump_speed", stats.jump_speed),
            ("gravity", stats.gravity),
        ] {
            if value <= 0 {
                return Err(ConfigError::NonPositiveStat { name, value });
            }
        }
        if !(0..=100).contains(&stats.air_control_percent) {
            return Err(ConfigError::AirControl(stats.air_control_percent));
        }
        if stats.leg_cadence == 0 {
            return Err(ConfigError::ZeroCadence);
        }

        Ok(())
    }

    /// The character's bounding box at start
    pub fn start_rect(&self) -> Rect {
        let (width, height) = self.style.size();
        Rect::from_mid_bottom(self.start, width, height)
    }
}
