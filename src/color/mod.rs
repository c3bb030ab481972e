mod order;
mod utils;

pub use order::{BgrOrder, ColorOrder, GrbOrder, PIXEL_SIZE, RgbOrder};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{color_hsv, pack_rgb, pack_rgbw, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
pub type Hsv = HSV;
