// Core value types shared by the interpreter, the rasterizer and the host.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Straight-alpha RGBA8 color.
/// Config files spell it as `#RRGGBB` or `#RRGGBBAA`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }

    pub(crate) fn from_premultiplied(px: tiny_skia::PremultipliedColorU8) -> Self {
        let c = px.demultiply();
        Self::rgba(c.red(), c.green(), c.blue(), c.alpha())
    }

    /// Pack as 0x00RRGGBB for minifb (alpha dropped).
    pub fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(bad)?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || !(hex.len() == 6 || hex.len() == 8) {
            return Err(bad());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| bad());
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::rgba(byte(0)?, byte(2)?, byte(4)?, a))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// What the pointer did. Codes the interpreter does not model land in `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
    Other(i32),
}

impl PointerAction {
    /// Map Android-style `MotionEvent` action codes (0 down, 1 up, 2 move).
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => PointerAction::Down,
            1 => PointerAction::Up,
            2 => PointerAction::Move,
            other => PointerAction::Other(other),
        }
    }
}

/// One pointer sample in surface pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self { action, x, y }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, x, y)
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, x, y)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, x, y)
    }
}

/// Window-ready pixels.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgb_and_rgba_hex() {
        assert_eq!("#12C700".parse::<Color>().unwrap(), Color::rgb(0x12, 0xC7, 0x00));
        assert_eq!("#ffeb3b80".parse::<Color>().unwrap(), Color::rgba(0xFF, 0xEB, 0x3B, 0x80));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["12C700", "#12C70", "#GG0000", "#12C70000FF", "#ÿÿÿ", "#+f+f+f", "#-1-1-1"] {
            assert!(matches!(bad.parse::<Color>(), Err(Error::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
    }

    #[test]
    fn packs_rgb_for_window() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_rgb_u32(), 0x00_12_34_56);
    }

    #[test]
    fn action_codes_map_like_motion_events() {
        assert_eq!(PointerAction::from_code(0), PointerAction::Down);
        assert_eq!(PointerAction::from_code(1), PointerAction::Up);
        assert_eq!(PointerAction::from_code(2), PointerAction::Move);
        assert_eq!(PointerAction::from_code(3), PointerAction::Other(3));
    }
}
