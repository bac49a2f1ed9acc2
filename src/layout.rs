use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::display::{Pixbuf, PixelView};
use crate::error::Result;

/// Where a view sits inside its backing storage.
///
/// Mirrors the arguments of [`Pixbuf::wrap`] so a host can keep buffer
/// geometry (a panel, a tile of a larger framebuffer, a sprite strip) in a
/// JSON file instead of code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferLayout {
    pub width: u32,
    pub height: u32,
    /// Pixels to skip before pixel (0, 0)
    #[serde(default)]
    pub offset: usize,
    /// Bytes per row, 0 for tightly packed rows
    #[serde(default)]
    pub stride: usize,
}

impl BufferLayout {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            offset: 0,
            stride: 0,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Apply this layout to a storage handle
    pub fn wrap<'a>(&self, buffer: &Pixbuf<'a>) -> Result<PixelView<'a>> {
        buffer.wrap(self.width, self.height, self.offset, self.stride)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load layout from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
