// Coordinate helpers: points, the jitter test, and the inset border rectangle.

/// A position on the surface in pixels (origin top-left, y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Halfway between `self` and `other`.
    /// Visual: where each smoothed segment ends, so successive curves meet without corners.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Per-axis absolute distance (|dx|, |dy|) to `other`.
    pub fn displacement(self, other: Point) -> (f32, f32) {
        ((other.x - self.x).abs(), (other.y - self.y).abs())
    }

    /// True when either axis moved at least `tolerance` pixels.
    pub fn moved_beyond(self, other: Point, tolerance: f32) -> bool {
        let (dx, dy) = self.displacement(other);
        dx >= tolerance || dy >= tolerance
    }
}

/// Inset border drawn on top of every composed frame.
/// Integer edges like a platform `Rect`; may be inverted on tiny surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl FrameRect {
    /// `[inset, inset, width - inset, height - inset]`.
    pub fn inset_from(width: u32, height: u32, inset: i32) -> Self {
        let edge = |side: u32| i32::try_from(side).unwrap_or(i32::MAX).saturating_sub(inset);
        Self {
            left: inset,
            top: inset,
            right: edge(width),
            bottom: edge(height),
        }
    }

    pub fn as_ltrb(&self) -> [i32; 4] {
        [self.left, self.top, self.right, self.bottom]
    }

    /// Nothing to draw when the edges meet or cross.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub(crate) fn to_skia(self) -> Option<tiny_skia::Rect> {
        if self.is_empty() {
            return None;
        }
        tiny_skia::Rect::from_ltrb(
            self.left as f32,
            self.top as f32,
            self.right as f32,
            self.bottom as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_is_halfway() {
        let m = Point::new(10.0, 10.0).midpoint(Point::new(20.0, 30.0));
        assert_eq!(m, Point::new(15.0, 20.0));
    }

    #[test]
    fn tolerance_is_inclusive_and_per_axis() {
        let p = Point::new(10.0, 10.0);
        assert!(!p.moved_beyond(Point::new(17.9, 2.1), 8.0));
        assert!(p.moved_beyond(Point::new(18.0, 10.0), 8.0));
        assert!(p.moved_beyond(Point::new(10.0, 2.0), 8.0));
    }

    #[test]
    fn y_delta_is_measured_against_y() {
        // x far from the committed y, but neither axis actually moved
        let p = Point::new(300.0, 10.0);
        assert!(!p.moved_beyond(Point::new(300.0, 10.0), 8.0));
    }

    #[test]
    fn frame_rect_insets_each_edge() {
        let r = FrameRect::inset_from(800, 600, 40);
        assert_eq!(r.as_ltrb(), [40, 40, 760, 560]);
        assert!(!r.is_empty());
        assert!(r.to_skia().is_some());
    }

    #[test]
    fn frame_rect_saturates_extreme_insets() {
        let r = FrameRect::inset_from(800, 600, i32::MIN);
        assert_eq!(r.right, i32::MAX);
        assert_eq!(r.bottom, i32::MAX);
        let r = FrameRect::inset_from(u32::MAX, 10, 40);
        assert_eq!(r.right, i32::MAX - 40);
    }

    #[test]
    fn frame_rect_inverts_on_small_surfaces() {
        let r = FrameRect::inset_from(60, 60, 40);
        assert_eq!(r.as_ltrb(), [40, 40, 20, 20]);
        assert!(r.is_empty());
        assert!(r.to_skia().is_none());
    }
}
