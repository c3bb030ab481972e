#![no_std]

pub mod bus;
pub mod color;
pub mod config;
pub mod delay;
pub mod gamma;
pub mod kind;
pub mod math8;
pub mod neopixel;
pub mod output;
pub mod shared;

pub use bus::{BrightnessBus, PixelBus};
pub use color::{BgrOrder, ColorOrder, GrbOrder, Hsv, Rgb, RgbOrder};
pub use config::StripConfig;
pub use delay::TickDelay;
pub use gamma::{gamma8, gamma32};
pub use kind::PixelType;
pub use math8::{scale8, sine8};
pub use neopixel::{GrbStrip, NeoPixel};
pub use output::{OutputDriver, SmartLedsOutput};
pub use shared::SharedStrip;
pub use embassy_time::Duration;
