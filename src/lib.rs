//! Pixel buffer engine for LED panels and small framebuffers
//!
//! Storage is a plain byte slice handed over by the host. [`Pixbuf`] turns it
//! into shared cells so any number of [`PixelView`]s (whole buffers, cut-out
//! sub-rectangles, sprite frames) can read and write it at once, including
//! blitting a region of a buffer onto itself.
//!
//! ```
//! use pixmod::{display, pack_color, Pixbuf, PixelWidth};
//!
//! let mut data = [0u8; 4 * 4 * 3];
//! let buf = Pixbuf::new(&mut data, PixelWidth::Three);
//! let view = buf.view(4, 4)?;
//! display::fill(&view, 1, 1, 2, 2, pack_color(255, 0, 0));
//! assert_eq!(view.get(2, 2), 0xFF0000);
//! # Ok::<(), pixmod::PixmodError>(())
//! ```

pub mod api;
pub mod color;
pub mod display;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod sprite;

pub use color::{pack_color, unpack_color};
pub use display::{BlitRegion, Pixbuf, PixelView, PixelWidth};
pub use error::{PixmodError, Result};
pub use geometry::{intersect, Rect};
pub use layout::BufferLayout;
pub use sprite::SpriteSheet;
