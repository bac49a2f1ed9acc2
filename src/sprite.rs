//! Sprite sheets: animation frames packed back to back in one blob
//!
//! Layout is a six byte header of little-endian `u16` values (frame count,
//! frame width, frame height) followed by the frames themselves, each
//! `width * height` pixels of 3 (RGB/GRB) or 4 (RGBW/GRBW) bytes. Frames are
//! exposed as [`PixelView`]s straight over the blob, ready to be blitted.

use crate::display::{Pixbuf, PixelView, PixelWidth};
use crate::error::{PixmodError, Result};

const HEADER_LEN: usize = 6;

pub struct SpriteSheet<'a> {
    frames: usize,
    width: u32,
    height: u32,
    pixels: Pixbuf<'a>,
}

impl<'a> SpriteSheet<'a> {
    /// Validate the header and take over the frame data that follows it.
    ///
    /// The pixel width is inferred from the payload size and must come out
    /// to exactly 3 or 4 bytes per pixel.
    pub fn parse(bytes: &'a mut [u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(PixmodError::SpriteTruncated(format!(
                "{} bytes is shorter than the {} byte header",
                bytes.len(),
                HEADER_LEN
            )));
        }
        let (header, payload) = bytes.split_at_mut(HEADER_LEN);
        let field = |i: usize| u16::from_le_bytes([header[2 * i], header[2 * i + 1]]);
        let (frames, width, height) = (field(0) as usize, field(1) as u32, field(2) as u32);

        let frame_pixels = width as usize * height as usize;
        let total_pixels = frames * frame_pixels;
        if total_pixels == 0 {
            return Err(PixmodError::SpriteTruncated(format!(
                "empty sheet: {} frames of {}x{}",
                frames, width, height
            )));
        }
        if payload.len() % total_pixels != 0 {
            return Err(PixmodError::SpriteTruncated(format!(
                "{} payload bytes do not divide into {} pixels",
                payload.len(),
                total_pixels
            )));
        }
        let pixel_width = match payload.len() / total_pixels {
            3 => PixelWidth::Three,
            4 => PixelWidth::Four,
            other => {
                return Err(PixmodError::SpriteTruncated(format!(
                    "{} bytes per pixel, expected 3 or 4",
                    other
                )))
            }
        };

        log::debug!(
            "sprite sheet: {} frames of {}x{}, {} bytes per pixel",
            frames,
            width,
            height,
            pixel_width.bytes()
        );

        Ok(Self {
            frames,
            width,
            height,
            pixels: Pixbuf::new(payload, pixel_width),
        })
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    #[inline]
    pub fn frame_width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn frame_height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixel_width(&self) -> PixelWidth {
        self.pixels.pixel_width()
    }

    /// View over frame `index`
    pub fn frame(&self, index: usize) -> Result<PixelView<'a>> {
        if index >= self.frames {
            return Err(PixmodError::FrameOutOfRange {
                index,
                count: self.frames,
            });
        }
        let frame_pixels = self.width as usize * self.height as usize;
        self.pixels.wrap(self.width, self.height, index * frame_pixels, 0)
    }

    /// Frame for an ever-increasing tick, wrapping around the sheet
    pub fn frame_at(&self, tick: usize) -> Result<PixelView<'a>> {
        self.frame(tick % self.frames)
    }
}
