//! Tick-quantised delays
//!
//! Mirrors the behaviour of an RTOS task delay: the requested duration is
//! rounded down to whole scheduler ticks, so a request shorter than one tick
//! does not wait at all.

use embassy_time::{Duration, Timer, block_for};

use crate::config::DEFAULT_TICK_PERIOD;

/// Delay provider with a fixed tick granularity
#[derive(Debug, Clone, Copy)]
pub struct TickDelay {
    tick_period: Duration,
}

impl TickDelay {
    /// Create a delay provider
    ///
    /// A zero tick period is treated as one tick of the time driver.
    pub const fn new(tick_period: Duration) -> Self {
        let tick_period = if tick_period.as_ticks() == 0 {
            Duration::from_ticks(1)
        } else {
            tick_period
        };
        Self { tick_period }
    }

    pub const fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Round a millisecond request down to whole ticks
    #[allow(clippy::cast_lossless)]
    pub const fn quantize(&self, ms: u32) -> Duration {
        let requested = Duration::from_millis(ms as u64).as_ticks();
        let tick = self.tick_period.as_ticks();
        Duration::from_ticks((requested / tick) * tick)
    }

    /// Block for approximately `ms` milliseconds
    pub fn delay(&self, ms: u32) {
        let duration = self.quantize(ms);
        if duration.as_ticks() == 0 {
            return;
        }
        block_for(duration);
    }

    /// Wait for approximately `ms` milliseconds, yielding to the executor
    pub async fn delay_async(&self, ms: u32) {
        let duration = self.quantize(ms);
        if duration.as_ticks() == 0 {
            return;
        }
        Timer::after(duration).await;
    }
}

impl Default for TickDelay {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_PERIOD)
    }
}
