use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Create an RGB color from a u32 value (0xRRGGBB format)
///
/// The top byte (white on RGBW strips) is ignored.
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0x00RRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    pack_rgb(color.r, color.g, color.b)
}

/// Pack separate channels into a u32 value (0x00RRGGBB format)
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn pack_rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Pack separate channels into a u32 value (0xWWRRGGBB format)
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn pack_rgbw(r: u8, g: u8, b: u8, w: u8) -> u32 {
    ((w as u32) << 24) | pack_rgb(r, g, b)
}

/// Convert HSV into a packed color
///
/// Hue spans the full u16 range for one turn of the color wheel. Only the
/// high byte is used, matching the 8-bit wheel of `smart_leds::hsv`.
#[allow(clippy::cast_possible_truncation)]
pub fn color_hsv(hue: u16, sat: u8, val: u8) -> u32 {
    let hsv = Hsv {
        hue: (hue >> 8) as u8,
        sat,
        val,
    };
    rgb_to_u32(hsv2rgb(hsv))
}
