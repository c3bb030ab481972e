//! Legacy pixel type flags
//!
//! Strips used to be described at runtime by a bit set combining the channel
//! order with the data rate. Here both are fixed at compile time, so the flags
//! are only carried for signature compatibility.

use core::ops::BitOr;

/// Legacy `neoPixelType` flags
///
/// The low byte encodes channel offsets as `(w << 6) | (r << 4) | (g << 2) | b`,
/// bit 8 selects the 400 kHz data rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelType(pub u16);

#[allow(clippy::identity_op)]
impl PixelType {
    pub const RGB: Self = Self((0 << 6) | (0 << 4) | (1 << 2) | 2);
    pub const RBG: Self = Self((0 << 6) | (0 << 4) | (2 << 2) | 1);
    pub const GRB: Self = Self((1 << 6) | (1 << 4) | (0 << 2) | 2);
    pub const GBR: Self = Self((2 << 6) | (2 << 4) | (0 << 2) | 1);
    pub const BRG: Self = Self((1 << 6) | (1 << 4) | (2 << 2) | 0);
    pub const BGR: Self = Self((2 << 6) | (2 << 4) | (1 << 2) | 0);
    pub const RGBW: Self = Self((3 << 6) | (0 << 4) | (1 << 2) | 2);
    pub const GRBW: Self = Self((3 << 6) | (1 << 4) | (0 << 2) | 2);

    pub const KHZ800: Self = Self(0x0000);
    pub const KHZ400: Self = Self(0x0100);

    /// Raw flag value
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether the flags describe a strip with a white channel
    ///
    /// Informational only. White is never transmitted.
    pub const fn has_white(self) -> bool {
        let low = self.0 & 0xFF;
        let w = (low >> 6) & 0b11;
        let r = (low >> 4) & 0b11;
        w != r
    }
}

impl BitOr for PixelType {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
