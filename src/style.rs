// The one pen every stroke (and the border) is drawn with.
// Built once from the config and never mutated afterward.

use tiny_skia::{LineCap, LineJoin, Paint, Stroke};

use crate::types::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    color: Color,
    width: f32,
    anti_alias: bool,
    dither: bool,
}

impl StrokeStyle {
    /// Round joins and caps, anti-aliased, dithered, stroke-only.
    /// `width` is in surface pixels.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            anti_alias: true,
            dither: true,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn anti_alias(&self) -> bool {
        self.anti_alias
    }

    /// Recorded for parity with platform paints. The backing surface is
    /// RGBA8888, so there is no lower-precision target to dither down to.
    pub fn dither(&self) -> bool {
        self.dither
    }

    pub(crate) fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(self.color.to_skia());
        paint.anti_alias = self.anti_alias;
        paint
    }

    pub(crate) fn stroke(&self) -> Stroke {
        Stroke {
            width: self.width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Default::default()
        }
    }
}
