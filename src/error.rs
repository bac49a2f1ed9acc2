//! Error type shared by buffer construction, configuration and sprite loading.
//!
//! Clipping never produces errors: off-buffer reads return 0, off-buffer
//! writes and empty blits are dropped. Only malformed buffer descriptions end
//! up here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PixmodError {
    /// Pixel widths other than 1..=4 bytes cannot be packed into a `u32` color
    #[error("unsupported pixel width {0}, expected 1 to 4 bytes")]
    UnsupportedPixelWidth(u8),

    #[error("stride of {stride} bytes is shorter than a row of {row_bytes} bytes")]
    StrideTooSmall { stride: usize, row_bytes: usize },

    /// The view footprint reaches past the end of the backing storage
    #[error("view needs {required} bytes of storage but only {available} are available")]
    InsufficientCapacity { required: usize, available: usize },

    #[error("view dimensions overflow the addressable range")]
    InvalidDimensions,

    #[error("sprite sheet is truncated or malformed: {0}")]
    SpriteTruncated(String),

    #[error("frame {index} is out of range for a sheet of {count} frames")]
    FrameOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PixmodError>;
