// Demo host for the drawing surface.
// • Hold Left Mouse and drag: draw a smoothed stroke.
// • Resize the window: the canvas is reallocated (and starts blank).
// • ESC quits.

mod draw;

use std::path::PathBuf;

use clap::Parser;
use draw::Drawer;
use minipaint::{DisplayConfig, DrawingSurface, Error, PointerEvent, logging};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "minipaint", about = "Freehand drawing surface demo")]
struct Args {
    /// TOML file with colors, stroke width, inset and touch tolerance
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG is honored when set)
    #[arg(long)]
    debug: bool,
}

/// Turns the polled mouse state into down/move/up samples.
#[derive(Default)]
struct MouseTracker {
    pressed: bool,
    last: (f32, f32),
}

impl MouseTracker {
    fn poll(&mut self, down: bool, pos: Option<(f32, f32)>) -> Option<PointerEvent> {
        let event = match (self.pressed, down, pos) {
            (false, true, Some((x, y))) => Some(PointerEvent::down(x, y)),
            (true, true, Some((x, y))) if (x, y) != self.last => Some(PointerEvent::moved(x, y)),
            (true, false, _) => {
                let (x, y) = pos.unwrap_or(self.last);
                Some(PointerEvent::up(x, y))
            }
            _ => None,
        };
        if let Some(p) = pos {
            self.last = p;
        }
        self.pressed = down && (self.pressed || pos.is_some());
        event
    }
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    logging::init(args.debug);

    let config = match &args.config {
        Some(path) => DisplayConfig::load(path)?,
        None => DisplayConfig::default(),
    };
    info!(?config, "starting");

    let mut drawer = Drawer::new("MiniPaint", config.width as usize, config.height as usize)?;
    let mut surface = DrawingSurface::new(config)?;
    let mut size = drawer.size();
    let mut mouse = MouseTracker::default();

    while drawer.is_open() && !drawer.esc_pressed() {
        /* 1) Follow window resizes. A minimized window reports 0x0; keep the old canvas. */
        let now = drawer.size();
        if now != size && now.0 > 0 && now.1 > 0 {
            match surface.on_size_changed(now.0 as i32, now.1 as i32, size.0 as i32, size.1 as i32) {
                Ok(()) => size = now,
                Err(e @ Error::InvalidDimensions { .. }) => warn!("{e}"),
                Err(e) => return Err(e), // out of memory: nothing left to draw on
            }
        }

        /* 2) Mouse → pointer events. */
        if let Some(event) = mouse.poll(drawer.left_mouse_down(), drawer.mouse_pos()) {
            surface.handle_event(event);
        }

        /* 3) Present only when something changed. */
        if surface.redraw_requested() {
            if let Some(frame) = surface.render() {
                drawer.present(&frame.to_frame_buffer())?;
                continue;
            }
        }
        drawer.idle();
    }

    info!("bye");
    Ok(())
}
