//! A minimal freehand drawing surface.
//!
//! Pointer samples go into [`DrawingSurface::handle_event`]; the touch
//! interpreter smooths them into quadratic segments and the rasterizer paints
//! them into a persistent pixmap. The host pulls [`DrawingSurface::render`]
//! whenever [`DrawingSurface::redraw_requested`] says something changed.
//!
//! ```
//! use minipaint::{DisplayConfig, DrawingSurface, PointerEvent};
//!
//! let mut surface = DrawingSurface::new(DisplayConfig::default())?;
//! surface.handle_event(PointerEvent::down(100.0, 100.0));
//! surface.handle_event(PointerEvent::moved(140.0, 120.0));
//! surface.handle_event(PointerEvent::up(140.0, 120.0));
//! let frame = surface.render().expect("surface has a size");
//! assert_eq!((frame.width(), frame.height()), (800, 600));
//! # Ok::<(), minipaint::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod path;
pub mod raster;
pub mod style;
pub mod surface;
pub mod touch;
pub mod types;

pub use config::DisplayConfig;
pub use error::{Error, Result};
pub use geometry::{FrameRect, Point};
pub use path::{ActivePath, QuadSegment};
pub use raster::{Frame, StrokeRasterizer};
pub use style::StrokeStyle;
pub use surface::DrawingSurface;
pub use touch::{TouchInterpreter, TouchPhase, TouchState};
pub use types::{Color, FrameBuffer, PointerAction, PointerEvent};
