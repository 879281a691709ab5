// Everything the surface needs from its host, fixed at construction.
// Sizes are in device-independent units; `scale_factor` turns them into pixels.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::Color;

pub const DEFAULT_STROKE_WIDTH: f32 = 12.0;
pub const DEFAULT_INSET: f32 = 40.0;
/// Typical platform touch slop before a drag counts as movement.
pub const DEFAULT_TOUCH_TOLERANCE: f32 = 8.0;
/// Largest border inset, in pixels, either way from the surface edge.
pub const MAX_INSET_PX: f32 = (i32::MAX / 2) as f32;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub inset: f32,
    pub touch_tolerance: f32,
    pub scale_factor: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background_color: Color::rgb(0xFF, 0xEB, 0x3B),
            stroke_color: Color::rgb(0x12, 0xC7, 0x00),
            stroke_width: DEFAULT_STROKE_WIDTH,
            inset: DEFAULT_INSET,
            touch_tolerance: DEFAULT_TOUCH_TOLERANCE,
            scale_factor: 1.0,
        }
    }
}

impl DisplayConfig {
    /// Read a TOML file. Missing keys fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width.into(),
                height: self.height.into(),
            });
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "scale_factor must be positive, got {}",
                self.scale_factor
            )));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "stroke_width must be positive, got {}",
                self.stroke_width
            )));
        }
        if !(self.touch_tolerance.is_finite() && self.touch_tolerance >= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "touch_tolerance must be zero or more, got {}",
                self.touch_tolerance
            )));
        }
        if !self.inset.is_finite() {
            return Err(Error::InvalidConfig("inset must be finite".into()));
        }

        // Units can be fine while the scaled pixel values are not.
        let inset_px = (self.inset * self.scale_factor).round();
        if !(inset_px.is_finite() && inset_px.abs() <= MAX_INSET_PX) {
            return Err(Error::InvalidConfig(format!(
                "inset of {} px is out of range",
                inset_px
            )));
        }
        if !self.stroke_width_px().is_finite() {
            return Err(Error::InvalidConfig("stroke_width overflows once scaled".into()));
        }
        if !self.touch_tolerance_px().is_finite() {
            return Err(Error::InvalidConfig("touch_tolerance overflows once scaled".into()));
        }
        Ok(())
    }

    pub fn stroke_width_px(&self) -> f32 {
        self.stroke_width * self.scale_factor
    }

    /// Border inset in whole pixels.
    pub fn inset_px(&self) -> i32 {
        (self.inset * self.scale_factor).round() as i32
    }

    pub fn touch_tolerance_px(&self) -> f32 {
        self.touch_tolerance * self.scale_factor
    }
}
