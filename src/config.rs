use embassy_time::Duration;

use crate::kind::PixelType;

/// Default data pin, GPIO2 on ESP8266 boards
pub const DEFAULT_PIN: u8 = 2;

/// Default scheduler tick period (100 Hz RTOS tick)
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(10);

/// Configuration for a pixel strip
#[derive(Debug, Clone)]
pub struct StripConfig {
    /// Data pin, kept for read-back
    pub pin: u8,
    /// Legacy type flags, accepted and ignored
    pub kind: PixelType,
    /// Brightness applied until the first `set_brightness`
    pub brightness: u8,
    /// Granularity of `delay`
    pub tick_period: Duration,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN,
            kind: PixelType::GRB | PixelType::KHZ800,
            brightness: 255,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}
