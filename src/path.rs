// The in-progress stroke: an origin plus a chain of quadratic segments.
// Kept as plain data so the interpreter can inspect it; converted to a
// tiny-skia path only when it is painted.

use tiny_skia::PathBuilder;

use crate::geometry::Point;

/// One midpoint-smoothed piece of a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadSegment {
    pub control: Point,
    pub end: Point,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivePath {
    origin: Option<Point>,
    segments: Vec<QuadSegment>,
}

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything: no origin, no segments.
    pub fn reset(&mut self) {
        self.origin = None;
        self.segments.clear();
    }

    /// Start the path at `p` without drawing anything.
    pub fn move_to(&mut self, p: Point) {
        self.segments.clear();
        self.origin = Some(p);
    }

    /// Append a quadratic curve from the current end through `control` to `end`.
    /// A path without an origin starts at `control`.
    pub fn quad_to(&mut self, control: Point, end: Point) {
        if self.origin.is_none() {
            self.origin = Some(control);
        }
        self.segments.push(QuadSegment { control, end });
    }

    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    pub fn segments(&self) -> &[QuadSegment] {
        &self.segments
    }

    /// Where the next segment starts.
    pub fn last_point(&self) -> Option<Point> {
        self.segments.last().map(|s| s.end).or(self.origin)
    }

    /// True when there is nothing to stroke.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Build the geometry tiny-skia strokes. `None` until a segment exists.
    pub fn to_skia(&self) -> Option<tiny_skia::Path> {
        let origin = self.origin?;
        if self.segments.is_empty() {
            return None;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(origin.x, origin.y);
        for s in &self.segments {
            pb.quad_to(s.control.x, s.control.y, s.end.x, s.end.y);
        }
        pb.finish()
    }
}
