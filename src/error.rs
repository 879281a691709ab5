// Error type for the drawing surface and its demo host.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Resize asked for a surface with a zero or negative side.
    #[error("invalid surface dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// The backing pixmap could not be allocated. Fatal for the host.
    #[error("failed to allocate a {width}x{height} backing surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid color {0:?} (expected #RRGGBB or #RRGGBBAA)")]
    InvalidColor(String),

    #[error("failed to read config file: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("window init error: {0}")]
    WindowInit(String),

    #[error("window update error: {0}")]
    WindowUpdate(String),
}

pub type Result<T> = std::result::Result<T, Error>;
