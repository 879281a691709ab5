// Touch interpreter: turns down/move/up samples into a smoothed path and
// hands the growing path to the rasterizer.
//
//   Idle --down--> StrokeStart --move (>= tolerance)--> Stroking --up--> Idle
//
// Moves smaller than the tolerance are dropped so a resting finger does not
// make the stroke crawl.

use tracing::{debug, trace};

use crate::geometry::Point;
use crate::path::ActivePath;
use crate::raster::StrokeRasterizer;
use crate::types::{PointerAction, PointerEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Idle,
    StrokeStart,
    Stroking,
}

/// Last committed point and the latest raw sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchState {
    pub current: Point,
    pub motion: Point,
}

pub struct TouchInterpreter {
    tolerance: f32,
    phase: TouchPhase,
    state: TouchState,
    path: ActivePath,
}

impl TouchInterpreter {
    /// `tolerance` is the jitter threshold in surface pixels.
    pub fn new(tolerance: f32) -> Self {
        Self {
            tolerance,
            phase: TouchPhase::Idle,
            state: TouchState::default(),
            path: ActivePath::new(),
        }
    }

    /// Feed one pointer sample. Committed segments are painted into `raster`.
    /// Unknown actions are ignored.
    pub fn handle(&mut self, event: PointerEvent, raster: &mut StrokeRasterizer) {
        let p = Point::new(event.x, event.y);
        match event.action {
            PointerAction::Down => self.touch_start(p),
            PointerAction::Move => self.touch_move(p, raster),
            PointerAction::Up => self.touch_up(p),
            PointerAction::Other(code) => trace!(code, "ignoring pointer action"),
        }
    }

    fn touch_start(&mut self, p: Point) {
        self.state.motion = p;
        self.path.reset();
        self.path.move_to(p);
        self.state.current = p;
        self.phase = TouchPhase::StrokeStart;
        debug!(x = p.x, y = p.y, "stroke start");
    }

    fn touch_move(&mut self, p: Point, raster: &mut StrokeRasterizer) {
        self.state.motion = p;
        if self.phase == TouchPhase::Idle {
            return; // no stroke to extend
        }

        let current = self.state.current;
        if !current.moved_beyond(p, self.tolerance) {
            trace!(x = p.x, y = p.y, "jitter below tolerance dropped");
            return;
        }

        // Curve toward the halfway point; the raw sample becomes the next control.
        let end = current.midpoint(p);
        self.path.quad_to(current, end);
        self.state.current = p;
        self.phase = TouchPhase::Stroking;
        trace!(cx = current.x, cy = current.y, ex = end.x, ey = end.y, "segment committed");

        raster.paint(&self.path);
    }

    fn touch_up(&mut self, p: Point) {
        self.state.motion = p;
        if self.phase != TouchPhase::Idle {
            debug!(segments = self.path.segments().len(), "stroke end");
        }
        // Reset so the finished stroke is never redrawn or extended.
        self.path.reset();
        self.phase = TouchPhase::Idle;
    }

    pub fn phase(&self) -> TouchPhase {
        self.phase
    }

    pub fn state(&self) -> TouchState {
        self.state
    }

    pub fn path(&self) -> &ActivePath {
        &self.path
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StrokeStyle;
    use crate::types::Color;
    use proptest::prelude::*;

    const TOL: f32 = 8.0;
    const BG: Color = Color::WHITE;

    fn setup() -> (TouchInterpreter, StrokeRasterizer) {
        let mut raster = StrokeRasterizer::new(StrokeStyle::new(Color::BLACK, 12.0), BG, 40);
        raster.resize(200, 200).unwrap();
        (TouchInterpreter::new(TOL), raster)
    }

    #[test]
    fn down_moves_origin_without_painting() {
        let (mut touch, mut raster) = setup();
        touch.handle(PointerEvent::down(10.0, 10.0), &mut raster);
        assert_eq!(touch.phase(), TouchPhase::StrokeStart);
        assert_eq!(touch.path().origin(), Some(Point::new(10.0, 10.0)));
        assert!(touch.path().is_empty());
        assert_eq!(touch.state().current, Point::new(10.0, 10.0));
        assert_eq!(raster.surface_pixel(10, 10), Some(BG));
    }

    #[test]
    fn committed_move_adds_midpoint_segment_and_paints() {
        let (mut touch, mut raster) = setup();
        touch.handle(PointerEvent::down(10.0, 10.0), &mut raster);
        touch.handle(PointerEvent::moved(10.0, 10.0), &mut raster);
        assert!(touch.path().is_empty());

        touch.handle(PointerEvent::moved(10.0, 10.0 + TOL + 1.0), &mut raster);
        let segs = touch.path().segments();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].control, Point::new(10.0, 10.0));
        assert_eq!(segs[0].end, Point::new(10.0, 10.0 + (TOL + 1.0) / 2.0));
        assert_eq!(touch.state().current, Point::new(10.0, 10.0 + TOL + 1.0));
        assert_eq!(touch.phase(), TouchPhase::Stroking);
        assert_eq!(raster.surface_pixel(10, 12), Some(Color::BLACK));

        touch.handle(PointerEvent::up(10.0, 19.0), &mut raster);
        assert!(touch.path().is_empty());
        assert_eq!(touch.path().origin(), None);
        assert_eq!(touch.phase(), TouchPhase::Idle);
        assert_eq!(raster.surface_pixel(10, 12), Some(Color::BLACK));
    }

    #[test]
    fn sub_tolerance_move_keeps_committed_point() {
        let (mut touch, mut raster) = setup();
        touch.handle(PointerEvent::down(50.0, 50.0), &mut raster);
        touch.handle(PointerEvent::moved(55.0, 45.0), &mut raster);
        assert!(touch.path().is_empty());
        assert_eq!(touch.state().current, Point::new(50.0, 50.0));
        assert_eq!(touch.state().motion, Point::new(55.0, 45.0));
        assert_eq!(touch.phase(), TouchPhase::StrokeStart);
    }

    #[test]
    fn move_without_down_paints_nothing() {
        let (mut touch, mut raster) = setup();
        let before = raster.compose();
        touch.handle(PointerEvent::moved(100.0, 100.0), &mut raster);
        assert!(touch.path().is_empty());
        assert_eq!(touch.phase(), TouchPhase::Idle);
        assert_eq!(raster.compose(), before);
    }

    #[test]
    fn unknown_actions_change_nothing() {
        let (mut touch, mut raster) = setup();
        touch.handle(PointerEvent::down(20.0, 20.0), &mut raster);
        let state = touch.state();
        touch.handle(
            PointerEvent::new(PointerAction::Other(3), 90.0, 90.0),
            &mut raster,
        );
        assert_eq!(touch.state(), state);
        assert_eq!(touch.phase(), TouchPhase::StrokeStart);
        assert_eq!(touch.path().origin(), Some(Point::new(20.0, 20.0)));
    }

    #[test]
    fn new_down_starts_a_disconnected_path() {
        let (mut touch, mut raster) = setup();
        touch.handle(PointerEvent::down(20.0, 20.0), &mut raster);
        touch.handle(PointerEvent::moved(60.0, 20.0), &mut raster);
        touch.handle(PointerEvent::down(100.0, 100.0), &mut raster);
        assert!(touch.path().is_empty());
        assert_eq!(touch.path().origin(), Some(Point::new(100.0, 100.0)));
    }

    proptest! {
        #[test]
        fn prop_jitter_never_mutates(dx in -7.99f32..7.99, dy in -7.99f32..7.99) {
            let (mut touch, mut raster) = setup();
            touch.handle(PointerEvent::down(100.0, 100.0), &mut raster);
            let path = touch.path().clone();
            let before = raster.compose();

            touch.handle(PointerEvent::moved(100.0 + dx, 100.0 + dy), &mut raster);

            prop_assert_eq!(touch.path(), &path);
            prop_assert_eq!(touch.state().current, Point::new(100.0, 100.0));
            prop_assert!(raster.compose() == before);
        }

        #[test]
        fn prop_segments_stay_connected(
            steps in prop::collection::vec((-40.0f32..40.0, -40.0f32..40.0), 1..20)
        ) {
            let (mut touch, mut raster) = setup();
            touch.handle(PointerEvent::down(100.0, 100.0), &mut raster);
            let mut committed = vec![Point::new(100.0, 100.0)];
            let mut at = Point::new(100.0, 100.0);
            for (dx, dy) in steps {
                at = Point::new(at.x + dx, at.y + dy);
                let before = touch.path().segments().len();
                touch.handle(PointerEvent::moved(at.x, at.y), &mut raster);
                if touch.path().segments().len() > before {
                    committed.push(at);
                }
            }

            let segs = touch.path().segments();
            prop_assert_eq!(segs.len(), committed.len() - 1);
            for (i, seg) in segs.iter().enumerate() {
                // control is the previous committed sample, end is halfway to the next
                prop_assert_eq!(seg.control, committed[i]);
                prop_assert_eq!(seg.end, committed[i].midpoint(committed[i + 1]));
            }
        }
    }
}
