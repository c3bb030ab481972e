//! Strip transmission engine
//!
//! [`PixelBus`] is the surface the legacy adapter forwards to. It owns the
//! pixel buffer and the brightness value, and pushes frames to hardware.
//! [`BrightnessBus`] is the bundled implementation over an [`OutputDriver`].

use core::marker::PhantomData;

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{ColorOrder, GrbOrder, PIXEL_SIZE, Rgb};
use crate::math8::scale8;
use crate::output::OutputDriver;

/// Pixel buffer with brightness control and hardware transmission
pub trait PixelBus {
    type Error;

    /// Prepare the bus for transmission
    fn begin(&mut self);

    /// Transmit the current buffer
    fn show(&mut self) -> Result<(), Self::Error>;

    /// Number of pixels held in the buffer
    fn pixel_count(&self) -> u16;

    /// Store a color. Out-of-range indices are ignored.
    fn set_pixel_color(&mut self, index: u16, color: Rgb);

    /// Read a stored color. Out-of-range indices read as black.
    fn pixel_color(&self, index: u16) -> Rgb;

    /// Set every pixel to one color
    fn clear_to(&mut self, color: Rgb);

    fn set_brightness(&mut self, brightness: u8);

    fn brightness(&self) -> u8;

    /// Raw buffer in wire channel order
    fn pixels(&mut self) -> &mut [u8];

    /// Length of the raw buffer in bytes
    fn pixels_size(&self) -> usize;
}

/// Transmission engine with a statically sized buffer
///
/// The pixel count is the const parameter `NUM_LEDS`, so the buffer always
/// holds exactly the pixels the strip was built with. It must fit the u16
/// index of the legacy API, which is checked at compile time.
///
/// Colors are stored unscaled in the channel order `C`. Brightness is
/// applied to a scratch frame on every `show`, so stored colors read back
/// exactly whatever the brightness is.
pub struct BrightnessBus<O, const NUM_LEDS: usize, C = GrbOrder> {
    output: O,
    brightness: u8,
    started: bool,
    pixels: [[u8; PIXEL_SIZE]; NUM_LEDS],
    frame: Vec<Rgb, NUM_LEDS>,
    _order: PhantomData<C>,
}

impl<O, const NUM_LEDS: usize, C> BrightnessBus<O, NUM_LEDS, C>
where
    O: OutputDriver,
    C: ColorOrder,
{
    /// Create a new bus with every pixel black
    pub fn new(output: O) -> Self {
        const {
            assert!(
                NUM_LEDS <= u16::MAX as usize,
                "pixel count must fit in a u16 index"
            );
        }
        Self {
            output,
            brightness: 255,
            started: false,
            pixels: [[0; PIXEL_SIZE]; NUM_LEDS],
            frame: Vec::new(),
            _order: PhantomData,
        }
    }

    /// Set the initial brightness
    #[must_use]
    pub fn with_brightness(mut self, brightness: u8) -> Self {
        self.brightness = brightness;
        self
    }

    /// Check if `begin` was called
    pub const fn is_started(&self) -> bool {
        self.started
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O, const NUM_LEDS: usize, C> PixelBus for BrightnessBus<O, NUM_LEDS, C>
where
    O: OutputDriver,
    C: ColorOrder,
{
    type Error = O::Error;

    fn begin(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[BrightnessBus.begin] {} pixels", NUM_LEDS);
        self.started = true;
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        if !self.started {
            #[cfg(feature = "esp32-log")]
            println!("[BrightnessBus.show] called before begin, skipping");
            return Ok(());
        }

        let brightness = self.brightness;
        self.frame.clear();
        self.frame.extend(
            self.pixels
                .iter()
                .map(|bytes| dim(C::decode(*bytes), brightness)),
        );
        self.output.write(&self.frame)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pixel_count(&self) -> u16 {
        // bounded by the assertion in `new`
        NUM_LEDS as u16
    }

    fn set_pixel_color(&mut self, index: u16, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(usize::from(index)) {
            *pixel = C::encode(color);
        }
    }

    fn pixel_color(&self, index: u16) -> Rgb {
        self.pixels
            .get(usize::from(index))
            .map_or_else(Rgb::default, |bytes| C::decode(*bytes))
    }

    fn clear_to(&mut self, color: Rgb) {
        self.pixels.fill(C::encode(color));
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn pixels(&mut self) -> &mut [u8] {
        self.pixels.as_flattened_mut()
    }

    fn pixels_size(&self) -> usize {
        NUM_LEDS * PIXEL_SIZE
    }
}

/// Scale a color by brightness
#[inline]
fn dim(color: Rgb, brightness: u8) -> Rgb {
    if brightness == 255 {
        return color;
    }
    Rgb {
        r: scale8(color.r, brightness),
        g: scale8(color.g, brightness),
        b: scale8(color.b, brightness),
    }
}
