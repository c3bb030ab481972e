//! Legacy NeoPixel API
//!
//! [`NeoPixel`] keeps the call shapes of the classic Arduino strip driver
//! (indexed setters, packed `u32` colors, a brightness scalar, `begin`/`show`)
//! and forwards every call to a [`PixelBus`]. The adapter holds no pixel or
//! brightness state of its own.
//!
//! | Legacy                         | Here                        |
//! |--------------------------------|-----------------------------|
//! | `setPixelColor(n, r, g, b)`    | [`NeoPixel::set_pixel_color`] |
//! | `setPixelColor(n, r, g, b, w)` | [`NeoPixel::set_pixel_color_rgbw`] |
//! | `setPixelColor(n, c)`          | [`NeoPixel::set_pixel_color_packed`] |
//! | `getPixelColor(n)`             | [`NeoPixel::pixel_color`]   |
//! | `numPixels()`                  | [`NeoPixel::num_pixels`]    |
//! | `getBrightness()`              | [`NeoPixel::brightness`]    |
//! | `getPixels()`                  | [`NeoPixel::pixels`]        |
//! | `updateLength(n)`              | [`NeoPixel::update_length`] |

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bus::{BrightnessBus, PixelBus};
use crate::color::{self, ColorOrder, GrbOrder, Rgb, rgb_from_u32, rgb_to_u32};
use crate::config::StripConfig;
use crate::delay::TickDelay;
use crate::gamma;
use crate::kind::PixelType;
use crate::math8;
use crate::output::OutputDriver;

/// Legacy strip over the bundled engine with GRB channel order
///
/// `NUM_LEDS` is the pixel count that the legacy constructor took at runtime.
pub type GrbStrip<O, const NUM_LEDS: usize> = NeoPixel<BrightnessBus<O, NUM_LEDS, GrbOrder>>;

/// Strip with the legacy NeoPixel API
pub struct NeoPixel<B> {
    bus: B,
    num_bytes: u16,
    pin: u8,
    kind: PixelType,
    ticker: TickDelay,
}

impl<O, const NUM_LEDS: usize, C> NeoPixel<BrightnessBus<O, NUM_LEDS, C>>
where
    O: OutputDriver,
    C: ColorOrder,
{
    /// Create a strip of `NUM_LEDS` pixels on `pin`
    ///
    /// `kind` is kept for compatibility only. Channel order and timing are
    /// fixed by the bus type.
    pub fn new(pin: u8, kind: PixelType, output: O) -> Self {
        let config = StripConfig {
            pin,
            kind,
            ..StripConfig::default()
        };
        Self::with_config(output, &config)
    }

    /// Create a strip from a full configuration
    pub fn with_config(output: O, config: &StripConfig) -> Self {
        let bus = BrightnessBus::new(output).with_brightness(config.brightness);
        Self::from_bus(bus, config)
    }
}

impl<B: PixelBus> NeoPixel<B> {
    /// Wrap an existing bus
    pub fn from_bus(bus: B, config: &StripConfig) -> Self {
        Self {
            bus,
            num_bytes: 0,
            pin: config.pin,
            kind: config.kind,
            ticker: TickDelay::new(config.tick_period),
        }
    }

    /// Initialize the bus and push the blank buffer once
    ///
    /// Call once before any other operation.
    pub fn begin(&mut self) {
        self.bus.begin();
        self.show();
        let size = self.bus.pixels_size();
        self.num_bytes = u16::try_from(size).unwrap_or(u16::MAX);
        #[cfg(feature = "esp32-log")]
        if usize::from(self.num_bytes) != size {
            println!(
                "[NeoPixel.begin] buffer is {} bytes, num_bytes saturated to {}",
                size,
                u16::MAX
            );
        }
    }

    /// Transmit the buffer
    ///
    /// Driver errors are dropped, as the legacy API has no way to report
    /// them. Use [`Self::try_show`] to observe them.
    pub fn show(&mut self) {
        let _ = self.bus.show().inspect_err(|_| {
            #[cfg(feature = "esp32-log")]
            println!("[NeoPixel.show] transmission failed");
        });
    }

    /// Transmit the buffer and report driver errors
    pub fn try_show(&mut self) -> Result<(), B::Error> {
        self.bus.show()
    }

    /// Block for `ms` milliseconds, rounded down to whole ticks
    pub fn delay(&self, ms: u32) {
        self.ticker.delay(ms);
    }

    /// Wait for `ms` milliseconds, rounded down to whole ticks
    pub async fn delay_async(&self, ms: u32) {
        self.ticker.delay_async(ms).await;
    }

    pub fn set_pixel_color(&mut self, n: u16, r: u8, g: u8, b: u8) {
        self.bus.set_pixel_color(n, Rgb { r, g, b });
    }

    /// Set a pixel from RGBW channels
    ///
    /// The bus has no white channel, `w` is discarded.
    pub fn set_pixel_color_rgbw(&mut self, n: u16, r: u8, g: u8, b: u8, _w: u8) {
        self.set_pixel_color(n, r, g, b);
    }

    /// Set a pixel from a packed `0x00RRGGBB` color
    ///
    /// The top byte is discarded.
    pub fn set_pixel_color_packed(&mut self, n: u16, c: u32) {
        self.bus.set_pixel_color(n, rgb_from_u32(c));
    }

    /// Read a pixel back as a packed `0x00RRGGBB` color
    pub fn pixel_color(&self, n: u16) -> u32 {
        rgb_to_u32(self.bus.pixel_color(n))
    }

    /// Fill pixels with a packed color
    ///
    /// Starts at `first` and covers `count` pixels, or every remaining pixel
    /// when `count` is 0. Does not transmit.
    pub fn fill(&mut self, c: u32, first: u16, count: u16) {
        let num_leds = self.num_pixels();
        if first >= num_leds {
            return;
        }
        let end = if count == 0 {
            num_leds
        } else {
            first.saturating_add(count).min(num_leds)
        };
        let color = rgb_from_u32(c);
        for n in first..end {
            self.bus.set_pixel_color(n, color);
        }
    }

    /// Set every pixel to black. Does not transmit.
    pub fn clear(&mut self) {
        self.bus.clear_to(Rgb::default());
    }

    /// Pixel count given at construction
    pub fn num_pixels(&self) -> u16 {
        self.bus.pixel_count()
    }

    /// Raw buffer length captured by `begin`, 0 before it
    ///
    /// Kept as a u16 like the legacy field. Strips above 21845 pixels have
    /// more bytes than that and report `u16::MAX`; use `pixels().len()`.
    pub const fn num_bytes(&self) -> u16 {
        self.num_bytes
    }

    pub const fn pin(&self) -> u8 {
        self.pin
    }

    pub const fn kind(&self) -> PixelType {
        self.kind
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.bus.set_brightness(brightness);
    }

    pub fn brightness(&self) -> u8 {
        self.bus.brightness()
    }

    /// Raw pixel bytes in the bus channel order
    ///
    /// No bounds are enforced beyond the slice itself.
    pub fn pixels(&mut self) -> &mut [u8] {
        self.bus.pixels()
    }

    /// Accepted for compatibility, the length is fixed at construction
    #[allow(clippy::unused_self)]
    pub fn update_length(&mut self, _num_leds: u16) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[NeoPixel.update_length] ignored, length stays {}",
            self.num_pixels()
        );
    }

    #[allow(clippy::unused_self)]
    pub const fn sine8(&self, x: u8) -> u8 {
        math8::sine8(x)
    }

    #[allow(clippy::unused_self)]
    pub const fn gamma8(&self, x: u8) -> u8 {
        gamma::gamma8(x)
    }

    /// Pack channels into `0x00RRGGBB`
    pub const fn color(r: u8, g: u8, b: u8) -> u32 {
        color::pack_rgb(r, g, b)
    }

    /// Pack channels into `0xWWRRGGBB`
    pub const fn color_rgbw(r: u8, g: u8, b: u8, w: u8) -> u32 {
        color::pack_rgbw(r, g, b, w)
    }

    pub fn color_hsv(hue: u16, sat: u8, val: u8) -> u32 {
        color::color_hsv(hue, sat, val)
    }

    pub const fn gamma32(c: u32) -> u32 {
        gamma::gamma32(c)
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn into_bus(self) -> B {
        self.bus
    }
}
