//! Pixel buffer views and everything that draws into them

mod blit;
mod draw;
mod pixel_buffer;

pub use blit::{blit, blit_color, blit_mask, clip_blit, copy, BlitRegion};
pub use draw::{add, fill, line};
pub use pixel_buffer::{Pixbuf, PixelView, PixelWidth};
