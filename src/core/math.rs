// Integer geometry: displacement vectors and axis-aligned rectangles

/// Integer displacement, velocity or acceleration
pub type Vector2i = glam::IVec2;

/// Axis-aligned rectangle in screen space (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rect of the given size whose mid-bottom anchor sits at `anchor`
    pub fn from_mid_bottom(anchor: Vector2i, width: i32, height: i32) -> Self {
        let mut rect = Self::new(0, 0, width, height);
        rect.set_mid_bottom(anchor);
        rect
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    pub fn mid_bottom(&self) -> Vector2i {
        Vector2i::new(self.center_x(), self.bottom())
    }

    /// Top-left corner
    pub fn position(&self) -> Vector2i {
        Vector2i::new(self.x, self.y)
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.width;
    }

    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.height;
    }

    pub fn set_center_x(&mut self, center_x: i32) {
        self.x = center_x - self.width / 2;
    }

    pub fn set_mid_bottom(&mut self, anchor: Vector2i) {
        self.set_center_x(anchor.x);
        self.set_bottom(anchor.y);
    }

    /// Copy of this rect moved by `offset`
    pub fn translate(&self, offset: Vector2i) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Strict overlap test: rects that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps_horizontally(other)
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether the horizontal extents overlap (shared edges excluded)
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
    }

    /// Smallest rect containing both
    pub fn union(&self, other: &Rect) -> Self {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Self::new(left, top, right - left, bottom - top)
    }

    /// Zero or negative area
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10, 20, 30, 40);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.right(), 40);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.bottom(), 60);
        assert_eq!(rect.center_x(), 25);
    }

    #[test]
    fn test_mid_bottom_anchor() {
        let rect = Rect::from_mid_bottom(Vector2i::new(50, 293), 24, 32);
        assert_eq!(rect.mid_bottom(), Vector2i::new(50, 293));
        assert_eq!(rect.left(), 38);
        assert_eq!(rect.top(), 261);
    }

    #[test]
    fn test_setters_keep_size() {
        let mut rect = Rect::new(0, 0, 10, 20);
        rect.set_right(100);
        rect.set_bottom(50);
        assert_eq!(rect, Rect::new(90, 30, 10, 20));
        rect.set_center_x(0);
        assert_eq!(rect.left(), -5);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        let c = Rect::new(0, 10, 10, 10);
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&Rect::new(9, 9, 10, 10)));
    }

    #[test]
    fn test_union() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 20, 10, 10);
        assert_eq!(a.union(&b), Rect::new(0, 0, 15, 30));
    }

    #[test]
    fn test_degenerate() {
        assert!(Rect::new(0, 0, 0, 10).is_degenerate());
        assert!(Rect::new(0, 0, 10, -1).is_degenerate());
        assert!(!Rect::new(0, 0, 1, 1).is_degenerate());
    }
}
