// Stroke rasterizer: a persistent off-screen pixmap that remembers every
// committed stroke, plus the inset border laid over it at compose time.
// Visual: what you drew earlier stays on screen while new strokes are added.

use tiny_skia::{Pixmap, PathBuilder, Transform};
use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::geometry::FrameRect;
use crate::path::ActivePath;
use crate::style::StrokeStyle;
use crate::types::{Color, FrameBuffer};

/// A composed, displayable image. Owned copy; the backing surface is untouched.
#[derive(Clone, PartialEq)]
pub struct Frame {
    pixmap: Pixmap,
}

impl Frame {
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Demultiplied color at (x, y), `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(Color::from_premultiplied)
    }

    pub fn as_pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Flatten to the 0x00RRGGBB layout a software window expects.
    pub fn to_rgb_u32(&self) -> Vec<u32> {
        self.pixmap
            .pixels()
            .iter()
            .map(|px| Color::from_premultiplied(*px).to_rgb_u32())
            .collect()
    }

    pub fn to_frame_buffer(&self) -> FrameBuffer {
        FrameBuffer {
            width: self.width() as usize,
            height: self.height() as usize,
            pixels: self.to_rgb_u32(),
        }
    }
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

pub struct StrokeRasterizer {
    style: StrokeStyle,
    background: Color,
    inset: i32,
    surface: Option<Pixmap>,   // None until the host reports a size
    frame: Option<FrameRect>,  // recomputed with every surface
}

impl StrokeRasterizer {
    pub fn new(style: StrokeStyle, background: Color, inset: i32) -> Self {
        Self {
            style,
            background,
            inset,
            surface: None,
            frame: None,
        }
    }

    /// Replace the backing surface with a fresh `width x height` one filled
    /// with the background color. Prior strokes are discarded.
    /// Visual: the canvas is blank again, with a new border around it.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            warn!(width, height, "rejecting empty backing surface");
            return Err(Error::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        }

        // Build the new surface completely before swapping it in.
        let mut pixmap =
            Pixmap::new(width, height).ok_or(Error::SurfaceAllocation { width, height })?;
        pixmap.fill(self.background.to_skia());

        self.surface = Some(pixmap); // old allocation dropped here
        self.frame = Some(FrameRect::inset_from(width, height, self.inset));
        debug!(width, height, frame = ?self.frame, "backing surface reallocated");
        Ok(())
    }

    /// Stroke `path` permanently into the backing surface.
    /// Nothing happens before the first resize or for a path with no segments.
    pub fn paint(&mut self, path: &ActivePath) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let Some(skia_path) = path.to_skia() else {
            return;
        };
        surface.stroke_path(
            &skia_path,
            &self.style.paint(),
            &self.style.stroke(),
            Transform::identity(),
            None,
        );
        trace!(segments = path.segments().len(), "path painted");
    }

    /// Copy of the backing surface with the frame border stroked on top.
    pub fn compose(&self) -> Option<Frame> {
        let mut pixmap = self.surface.as_ref()?.clone();
        if let Some(rect) = self.frame.and_then(FrameRect::to_skia) {
            let border = PathBuilder::from_rect(rect);
            pixmap.stroke_path(
                &border,
                &self.style.paint(),
                &self.style.stroke(),
                Transform::identity(),
                None,
            );
        }
        Some(Frame { pixmap })
    }

    pub fn surface(&self) -> Option<&Pixmap> {
        self.surface.as_ref()
    }

    pub fn frame_rect(&self) -> Option<FrameRect> {
        self.frame
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Current backing-surface color at (x, y).
    pub fn surface_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.surface.as_ref()?.pixel(x, y).map(Color::from_premultiplied)
    }
}
