//! Byte layout of a pixel inside the raw strip buffer
//!
//! The order is picked at compile time through a type parameter, the same
//! way the wire protocol of a WS2812 strip is fixed by the part on the board.

use crate::color::Rgb;

/// Number of bytes used by one pixel in the raw buffer
pub const PIXEL_SIZE: usize = 3;

/// Channel order of a pixel in the raw buffer
///
/// The constants are byte offsets of each channel within a pixel.
pub trait ColorOrder {
    const RED: usize;
    const GREEN: usize;
    const BLUE: usize;

    /// Lay out a color in this channel order
    #[inline]
    fn encode(color: Rgb) -> [u8; PIXEL_SIZE] {
        let mut bytes = [0; PIXEL_SIZE];
        bytes[Self::RED] = color.r;
        bytes[Self::GREEN] = color.g;
        bytes[Self::BLUE] = color.b;
        bytes
    }

    /// Read a color laid out in this channel order
    #[inline]
    fn decode(bytes: [u8; PIXEL_SIZE]) -> Rgb {
        Rgb {
            r: bytes[Self::RED],
            g: bytes[Self::GREEN],
            b: bytes[Self::BLUE],
        }
    }
}

/// Green, red, blue. Native order of WS2812B and SK6812 parts.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrbOrder;

impl ColorOrder for GrbOrder {
    const RED: usize = 1;
    const GREEN: usize = 0;
    const BLUE: usize = 2;
}

/// Red, green, blue. Used by WS2811 and early v1 pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbOrder;

impl ColorOrder for RgbOrder {
    const RED: usize = 0;
    const GREEN: usize = 1;
    const BLUE: usize = 2;
}

/// Blue, green, red
#[derive(Debug, Clone, Copy, Default)]
pub struct BgrOrder;

impl ColorOrder for BgrOrder {
    const RED: usize = 2;
    const GREEN: usize = 1;
    const BLUE: usize = 0;
}
