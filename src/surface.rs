// The host-facing drawing surface: pointer events in, composed frames out.
// Wires the touch interpreter to the stroke rasterizer and keeps the
// "please redraw" flag the host polls between frames.

use tracing::{debug, warn};

use crate::config::DisplayConfig;
use crate::error::{Error, Result};
use crate::raster::{Frame, StrokeRasterizer};
use crate::style::StrokeStyle;
use crate::touch::TouchInterpreter;
use crate::types::PointerEvent;

type ClickListener = Box<dyn FnMut()>;

pub struct DrawingSurface {
    raster: StrokeRasterizer,
    touch: TouchInterpreter,
    redraw: bool,
    on_click: Option<ClickListener>,
}

impl DrawingSurface {
    /// Validate `config`, build the pen, and allocate the initial surface.
    pub fn new(config: DisplayConfig) -> Result<Self> {
        config.validate()?;
        let style = StrokeStyle::new(config.stroke_color, config.stroke_width_px());
        let mut raster =
            StrokeRasterizer::new(style, config.background_color, config.inset_px());
        raster.resize(config.width, config.height)?;
        debug!(?config, "drawing surface created");

        Ok(Self {
            raster,
            touch: TouchInterpreter::new(config.touch_tolerance_px()),
            redraw: true,
            on_click: None,
        })
    }

    /// Accept one pointer sample. Always handled.
    pub fn handle_event(&mut self, event: PointerEvent) -> bool {
        self.touch.handle(event, &mut self.raster);
        self.redraw = true;
        self.perform_click();
        true
    }

    /// Called by the host when the surface is handed a gesture as a click.
    pub fn set_on_click(&mut self, listener: impl FnMut() + 'static) {
        self.on_click = Some(Box::new(listener));
    }

    fn perform_click(&mut self) {
        if let Some(listener) = self.on_click.as_mut() {
            listener();
        }
    }

    /// Layout callback. Non-positive sizes are refused and the old surface kept.
    pub fn on_size_changed(
        &mut self,
        width: i32,
        height: i32,
        old_width: i32,
        old_height: i32,
    ) -> Result<()> {
        let (Ok(w), Ok(h)) = (u32::try_from(width), u32::try_from(height)) else {
            warn!(width, height, "ignoring negative surface size");
            return Err(Error::InvalidDimensions {
                width: width.into(),
                height: height.into(),
            });
        };
        debug!(old_width, old_height, width, height, "size changed");
        self.raster.resize(w, h)?;
        self.redraw = true;
        Ok(())
    }

    /// Pull the current frame and clear the pending redraw request.
    pub fn render(&mut self) -> Option<Frame> {
        self.redraw = false;
        self.raster.compose()
    }

    /// True when something changed since the last `render`.
    pub fn redraw_requested(&self) -> bool {
        self.redraw
    }

    pub fn interpreter(&self) -> &TouchInterpreter {
        &self.touch
    }

    pub fn rasterizer(&self) -> &StrokeRasterizer {
        &self.raster
    }
}
