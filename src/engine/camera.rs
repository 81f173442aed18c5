// Side-scrolling camera: the world moves under a near-centred actor

use crate::core::{Rect, Vector2i};

/// What one scroll step did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollOutcome {
    /// How far the world moved left this tick
    pub shift: i32,
    /// Whether the actor was pushed back inside the left edge
    pub clamped_left: bool,
}

/// Dead-zone scroll controller
///
/// The actor lives in screen space. Once its centre passes the viewport's
/// horizontal centre the excess becomes scroll: the actor is pinned back to
/// the centre and the world (obstacles and backdrop) is shifted left by the
/// same amount. Scrolling only moves forward; the left edge of the viewport
/// is a hard wall for the actor.
#[derive(Debug, Clone)]
pub struct ScrollController {
    viewport: Rect,
    /// Total distance scrolled since the start, in world units
    ///
    /// Saturates at `i32::MAX`: at 4 px per tick and 60 ticks per second
    /// that is about 2,500 hours of running right.
    world_offset: i32,
    /// Width of one tile of the repeating backdrop
    backdrop_period: i32,
}

impl ScrollController {
    pub fn new(viewport: Rect, backdrop_period: i32) -> Self {
        Self {
            viewport,
            world_offset: 0,
            backdrop_period,
        }
    }

    pub fn world_offset(&self) -> i32 {
        self.world_offset
    }

    /// Recentre the actor and scroll the world if it passed the centre line
    pub fn scroll(&mut self, actor: &mut Rect) -> ScrollOutcome {
        let mut outcome = ScrollOutcome::default();

        let excess = actor.center_x() - self.viewport.center_x();
        if excess > 0 {
            self.world_offset = self.world_offset.saturating_add(excess);
            actor.set_center_x(self.viewport.center_x());
            outcome.shift = excess;
            log::trace!("Scrolled {} (offset {})", excess, self.world_offset);
        }

        if actor.left() < self.viewport.left() {
            actor.set_left(self.viewport.left());
            outcome.clamped_left = true;
        }

        outcome
    }

    /// Scroll phase of the backdrop, always in `[0, backdrop_period)`
    pub fn backdrop_phase(&self) -> i32 {
        self.world_offset.rem_euclid(self.backdrop_period)
    }

    /// Screen-space rect of the tiled backdrop
    ///
    /// Wide enough to cover the viewport at any phase.
    pub fn backdrop_rect(&self) -> Rect {
        let period = self.backdrop_period;
        let tiles = (self.viewport.width + period - 1) / period + 1;
        Rect::new(
            self.viewport.left() - self.backdrop_phase(),
            self.viewport.top(),
            period * tiles,
            self.viewport.height,
        )
    }

    /// Offset applied to world geometry to draw it
    pub fn screen_offset(&self) -> Vector2i {
        Vector2i::new(-self.world_offset, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> ScrollController {
        ScrollController::new(Rect::new(0, 0, 600, 337), 600)
    }

    #[test]
    fn test_no_scroll_left_of_centre() {
        let mut camera = camera();
        let mut actor = Rect::new(38, 261, 24, 32);
        let outcome = camera.scroll(&mut actor);
        assert_eq!(outcome, ScrollOutcome::default());
        assert_eq!(actor.left(), 38);
        assert_eq!(camera.world_offset(), 0);
    }

    #[test]
    fn test_scroll_equals_excess_over_centre() {
        let mut camera = camera();
        let mut actor = Rect::new(0, 261, 24, 32);
        actor.set_center_x(300);
        assert_eq!(camera.scroll(&mut actor).shift, 0);

        actor = actor.translate(Vector2i::new(7, 0));
        let outcome = camera.scroll(&mut actor);
        assert_eq!(outcome.shift, 7);
        assert_eq!(actor.center_x(), 300);
        assert_eq!(camera.world_offset(), 7);
    }

    #[test]
    fn test_moving_back_does_not_unscroll() {
        let mut camera = camera();
        let mut actor = Rect::new(0, 261, 24, 32);
        actor.set_center_x(310);
        camera.scroll(&mut actor);
        actor = actor.translate(Vector2i::new(-50, 0));
        let outcome = camera.scroll(&mut actor);
        assert_eq!(outcome.shift, 0);
        assert_eq!(camera.world_offset(), 10);
        assert_eq!(actor.center_x(), 250);
    }

    #[test]
    fn test_left_edge_clamps_actor_not_scroll() {
        let mut camera = camera();
        let mut actor = Rect::new(-5, 261, 24, 32);
        let outcome = camera.scroll(&mut actor);
        assert!(outcome.clamped_left);
        assert_eq!(outcome.shift, 0);
        assert_eq!(actor.left(), 0);
        assert_eq!(camera.world_offset(), 0);
    }

    #[test]
    fn test_backdrop_wraps_by_period() {
        let mut camera = camera();
        let mut actor = Rect::new(0, 261, 24, 32);
        actor.set_center_x(300 + 605);
        camera.scroll(&mut actor);
        assert_eq!(camera.world_offset(), 605);
        assert_eq!(camera.backdrop_phase(), 5);
        let backdrop = camera.backdrop_rect();
        assert_eq!(backdrop.left(), -5);
        assert!(backdrop.right() >= 600);
    }

    #[test]
    fn test_screen_offset_follows_scroll() {
        let mut camera = camera();
        let mut actor = Rect::new(0, 261, 24, 32);
        actor.set_center_x(340);
        camera.scroll(&mut actor);

        let block = Rect::new(292, 194, 16, 16);
        assert_eq!(block.translate(camera.screen_offset()).left(), 252);
    }

    #[test]
    fn test_world_offset_saturates() {
        let mut camera = camera();
        camera.world_offset = i32::MAX - 1;
        let mut actor = Rect::new(0, 261, 24, 32);
        actor.set_center_x(304);

        let outcome = camera.scroll(&mut actor);
        assert_eq!(outcome.shift, 4);
        assert_eq!(camera.world_offset(), i32::MAX);
        assert_eq!(actor.center_x(), 300);
        assert!((0..600).contains(&camera.backdrop_phase()));
    }
}
