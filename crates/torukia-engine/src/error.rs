use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by animation configuration and texture construction.
///
/// Every variant is a contract violation or a construction-time resource
/// failure. A call that returns one of these leaves its receiver unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid frame range [{start}, {end}]")]
    InvalidRange { start: u32, end: u32 },

    #[error("frame {frame} outside range [{start}, {end}]")]
    InvalidFrame { frame: u32, start: u32, end: u32 },

    #[error("invalid animation speed {speed}: must be at least 1")]
    InvalidSpeed { speed: u32 },

    #[error("invalid frame size {width}x{height}")]
    InvalidFrameSize { width: u32, height: u32 },

    #[error("asset not loaded: {}: {reason}", path.display())]
    AssetNotLoaded { path: PathBuf, reason: String },
}
