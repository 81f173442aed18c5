// Character tuning constants

/// Movement tuning for the playable character
///
/// Speeds are in pixels per tick, gravity in pixels per tick squared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorStats {
    /// Horizontal speed while running on a surface
    pub run_speed: i32,
    /// Upward speed at the start of a jump
    pub jump_speed: i32,
    /// Downward acceleration while airborne
    pub gravity: i32,
    /// Share of `run_speed` a run intent gets while airborne (0..=100)
    pub air_control_percent: i32,
    /// Ticks per animation frame (higher is slower legs)
    pub leg_cadence: u32,
}

pub const BASE_STATS: ActorStats = ActorStats {
    run_speed: 4,
    jump_speed: 12,
    gravity: 1,
    air_control_percent: 50,
    leg_cadence: 2,
};

impl Default for ActorStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl ActorStats {
    /// Horizontal speed granted to a run intent while airborne
    pub fn air_run_speed(&self) -> i32 {
        self.run_speed * self.air_control_percent / 100
    }
}
