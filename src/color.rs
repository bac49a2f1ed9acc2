//! Packed color helpers
//!
//! Every primitive takes and returns colors as a `u32` laid out as
//! `0x00RRGGBB`. Channel clamping in [`pack_color`] is the only validation
//! color input ever gets.

/// Largest value a single channel can hold
pub const CHANNEL_MAX: i32 = 255;

#[inline]
fn clamp_channel(value: i32) -> u32 {
    value.clamp(0, CHANNEL_MAX) as u32
}

/// Pack red, green and blue into `0x00RRGGBB`, clamping each channel to 0..=255
#[inline]
pub fn pack_color(r: i32, g: i32, b: i32) -> u32 {
    (clamp_channel(r) << 16) | (clamp_channel(g) << 8) | clamp_channel(b)
}

/// Split a packed color into (r, g, b). Bits above 23 are ignored.
#[inline]
pub fn unpack_color(color: u32) -> (i32, i32, i32) {
    (
        ((color >> 16) & 0xFF) as i32,
        ((color >> 8) & 0xFF) as i32,
        (color & 0xFF) as i32,
    )
}

/// Add `delta` to every channel of `color` and repack with clamping
#[inline]
pub fn offset_color(color: u32, delta: i32) -> u32 {
    let (r, g, b) = unpack_color(color);
    pack_color(
        r.saturating_add(delta),
        g.saturating_add(delta),
        b.saturating_add(delta),
    )
}
