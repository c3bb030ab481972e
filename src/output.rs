use smart_leds::SmartLedsWrite;

use crate::color::Rgb;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The transmission engine is generic over this trait.
pub trait OutputDriver {
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}

/// Output driver backed by any `smart-leds` writer
///
/// Wraps RMT, PIO or SPI based WS2812 drivers that implement
/// [`SmartLedsWrite`].
#[derive(Debug)]
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a mutable reference to the wrapped writer
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writer.write(colors.iter().copied())
    }
}
