use crate::core::{Rect, Vector2i};

/// What a static obstacle is, for logging and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Question-mark block hanging above the ground
    LuckyBlock,
    /// Plain solid block, placed by level data
    #[allow(dead_code)]
    Block,
}

/// Immutable solid rectangle owned by the level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticObstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl StaticObstacle {
    pub fn new(kind: ObstacleKind, rect: Rect) -> Self {
        Self { kind, rect }
    }

    /// Copy of this obstacle moved by `offset`
    pub fn translate(&self, offset: Vector2i) -> Self {
        Self::new(self.kind, self.rect.translate(offset))
    }
}

/// The ground plane: solid everywhere below `level`, across the whole viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ground {
    pub level: i32,
}

impl Ground {
    pub fn new(level: i32) -> Self {
        Self { level }
    }
}

/// Contact signals produced by one resolution
///
/// The resolver never changes character state; the state machine reads these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContactFlags {
    /// Resting on the ground plane or on top of a block after correction
    pub grounded: bool,
    /// A downward move ended on a surface this tick
    pub landed: bool,
    pub blocked_left: bool,
    pub blocked_right: bool,
    pub head_bump: bool,
}

/// Output of [`resolve`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub rect: Rect,
    pub velocity: Vector2i,
    pub contacts: ContactFlags,
}

/// Axis-separated collision resolution for one tick
///
/// `pre` is the rect before integration and `post` the rect after it; the
/// displacement tested is `post - pre`. Each axis is swept from `pre`
/// independently, blocks first and the ground plane last. Whatever the
/// combined move still overlaps afterwards is separated block by block:
/// blocks entered this tick are clipped on the dominant axis first (ties go
/// horizontal), blocks the body was already inside are left by the
/// shallowest side.
pub fn resolve(
    pre: Rect,
    post: Rect,
    velocity: Vector2i,
    obstacles: &[StaticObstacle],
    ground: Ground,
) -> Resolution {
    let delta = post.position() - pre.position();
    let mut contacts = ContactFlags::default();
    let mut velocity = velocity;
    let mut rect = post;

    if let Some(x) = sweep_horizontal(&pre, delta.x, obstacles) {
        rect.x = x;
        block_horizontal(delta.x, &mut velocity, &mut contacts);
    }
    if let Some(y) = sweep_vertical(&pre, delta.y, obstacles) {
        rect.y = y;
        block_vertical(delta.y, &mut velocity, &mut contacts);
    }

    separate(&pre, &mut rect, delta, obstacles, &mut velocity, &mut contacts);

    if rect.bottom() > ground.level {
        rect.set_bottom(ground.level);
        velocity.y = 0;
        contacts.grounded = true;
        contacts.landed = true;
    }

    let supported = is_supported(&rect, obstacles, ground);
    contacts.grounded |= supported;
    // Falling exactly onto a surface needs no correction but still lands
    contacts.landed |= supported && delta.y > 0;

    Resolution {
        rect,
        velocity,
        contacts,
    }
}

/// Whether `rect` rests exactly on the ground plane or on top of a block
pub fn is_supported(rect: &Rect, obstacles: &[StaticObstacle], ground: Ground) -> bool {
    rect.bottom() == ground.level
        || obstacles
            .iter()
            .any(|o| o.rect.top() == rect.bottom() && rect.overlaps_horizontally(&o.rect))
}

/// Clear every overlap the per-axis sweeps left behind
///
/// Each correction moves the rect back towards `pre`, which may uncover a
/// new overlap, so passes repeat until one is clean. If that does not settle
/// the body stays where it was.
fn separate(
    pre: &Rect,
    rect: &mut Rect,
    delta: Vector2i,
    obstacles: &[StaticObstacle],
    velocity: &mut Vector2i,
    contacts: &mut ContactFlags,
) {
    for _ in 0..=obstacles.len() {
        let mut corrected = false;
        for obstacle in obstacles {
            let r = &obstacle.rect;
            if !rect.intersects(r) {
                continue;
            }
            if pre.intersects(r) {
                push_out(rect, r, velocity, contacts);
                log::trace!("Pushed out of {:?} at {:?}", obstacle.kind, r);
            } else {
                let clipped = if delta.x.abs() >= delta.y.abs() {
                    clip_horizontal(pre, rect, r, delta.x, velocity, contacts)
                        || clip_vertical(pre, rect, r, delta.y, velocity, contacts)
                } else {
                    clip_vertical(pre, rect, r, delta.y, velocity, contacts)
                        || clip_horizontal(pre, rect, r, delta.x, velocity, contacts)
                };
                if clipped {
                    log::trace!("Corner clip against {:?} resolved", obstacle.kind);
                }
            }
            corrected = true;
        }
        if !corrected {
            return;
        }
    }

    let stuck = obstacles
        .iter()
        .any(|o| rect.intersects(&o.rect) && !pre.intersects(&o.rect));
    if stuck {
        log::debug!("Overlap did not settle, holding at {:?}", pre);
        rect.x = pre.x;
        rect.y = pre.y;
        *velocity = Vector2i::ZERO;
    }
}

/// Move `rect` out of a block it already overlaps, through the nearest side
fn push_out(rect: &mut Rect, r: &Rect, velocity: &mut Vector2i, contacts: &mut ContactFlags) {
    let left = rect.right() - r.left();
    let right = r.right() - rect.left();
    let up = rect.bottom() - r.top();
    let down = r.bottom() - rect.top();
    let nearest = left.min(right).min(up).min(down);

    if nearest == left {
        rect.set_right(r.left());
        velocity.x = velocity.x.min(0);
        contacts.blocked_right = true;
    } else if nearest == right {
        rect.set_left(r.right());
        velocity.x = velocity.x.max(0);
        contacts.blocked_left = true;
    } else if nearest == up {
        rect.set_bottom(r.top());
        velocity.y = velocity.y.min(0);
        contacts.grounded = true;
        contacts.landed = true;
    } else {
        rect.set_top(r.bottom());
        velocity.y = velocity.y.max(0);
        contacts.head_bump = true;
    }
}

/// Corrected x for a horizontal-only move, if any block stops it
fn sweep_horizontal(pre: &Rect, dx: i32, obstacles: &[StaticObstacle]) -> Option<i32> {
    if dx == 0 {
        return None;
    }
    let swept = pre.union(&pre.translate(Vector2i::new(dx, 0)));
    let mut clamp: Option<i32> = None;
    for obstacle in obstacles {
        let r = &obstacle.rect;
        if !swept.intersects(r) {
            continue;
        }
        if dx > 0 && pre.right() <= r.left() {
            let x = r.left() - pre.width;
            clamp = Some(clamp.map_or(x, |c| c.min(x)));
        } else if dx < 0 && pre.left() >= r.right() {
            let x = r.right();
            clamp = Some(clamp.map_or(x, |c| c.max(x)));
        }
    }
    clamp
}

/// Corrected y for a vertical-only move, if any block stops it
fn sweep_vertical(pre: &Rect, dy: i32, obstacles: &[StaticObstacle]) -> Option<i32> {
    if dy == 0 {
        return None;
    }
    let swept = pre.union(&pre.translate(Vector2i::new(0, dy)));
    let mut clamp: Option<i32> = None;
    for obstacle in obstacles {
        let r = &obstacle.rect;
        if !swept.intersects(r) {
            continue;
        }
        if dy > 0 && pre.bottom() <= r.top() {
            let y = r.top() - pre.height;
            clamp = Some(clamp.map_or(y, |c| c.min(y)));
        } else if dy < 0 && pre.top() >= r.bottom() {
            let y = r.bottom();
            clamp = Some(clamp.map_or(y, |c| c.max(y)));
        }
    }
    clamp
}

fn clip_horizontal(
    pre: &Rect,
    rect: &mut Rect,
    r: &Rect,
    dx: i32,
    velocity: &mut Vector2i,
    contacts: &mut ContactFlags,
) -> bool {
    if dx > 0 && pre.right() <= r.left() {
        rect.set_right(r.left());
    } else if dx < 0 && pre.left() >= r.right() {
        rect.set_left(r.right());
    } else {
        return false;
    }
    block_horizontal(dx, velocity, contacts);
    true
}

fn clip_vertical(
    pre: &Rect,
    rect: &mut Rect,
    r: &Rect,
    dy: i32,
    velocity: &mut Vector2i,
    contacts: &mut ContactFlags,
) -> bool {
    if dy > 0 && pre.bottom() <= r.top() {
        rect.set_bottom(r.top());
    } else if dy < 0 && pre.top() >= r.bottom() {
        rect.set_top(r.bottom());
    } else {
        return false;
    }
    block_vertical(dy, velocity, contacts);
    true
}

fn block_horizontal(dx: i32, velocity: &mut Vector2i, contacts: &mut ContactFlags) {
    velocity.x = 0;
    if dx > 0 {
        contacts.blocked_right = true;
    } else {
        contacts.blocked_left = true;
    }
}

fn block_vertical(dy: i32, velocity: &mut Vector2i, contacts: &mut ContactFlags) {
    velocity.y = 0;
    if dy > 0 {
        contacts.grounded = true;
        contacts.landed = true;
    } else {
        contacts.head_bump = true;
    }
}
