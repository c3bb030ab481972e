mod tests {
    use core::convert::Infallible;
    use core::task::Poll;

    use embassy_futures::{block_on, poll_once};
    use embassy_time::Duration;
    use neopixel_compat::{GrbStrip, NeoPixel, OutputDriver, Rgb, StripConfig, TickDelay};

    struct Sink;

    impl OutputDriver for Sink {
        type Error = Infallible;

        fn write(&mut self, _colors: &[Rgb]) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_quantize_rounds_down_to_ticks() {
        let delay = TickDelay::new(Duration::from_millis(10));
        assert_eq!(delay.quantize(0), Duration::from_millis(0));
        assert_eq!(delay.quantize(9), Duration::from_millis(0));
        assert_eq!(delay.quantize(10), Duration::from_millis(10));
        assert_eq!(delay.quantize(15), Duration::from_millis(10));
        assert_eq!(delay.quantize(1234), Duration::from_millis(1230));
    }

    #[test]
    fn test_zero_tick_period_uses_driver_tick() {
        let delay = TickDelay::new(Duration::from_ticks(0));
        assert_eq!(delay.tick_period(), Duration::from_ticks(1));
        assert_eq!(delay.quantize(7), Duration::from_millis(7));
    }

    #[test]
    fn test_delay_blocks_for_whole_ticks() {
        let delay = TickDelay::new(Duration::from_millis(10));

        let start = std::time::Instant::now();
        delay.delay(5);
        assert!(start.elapsed() < std::time::Duration::from_millis(5));

        let start = std::time::Instant::now();
        delay.delay(25);
        assert!(start.elapsed() >= std::time::Duration::from_millis(20));
    }

    #[test]
    fn test_async_delay_below_one_tick_is_ready() {
        let delay = TickDelay::new(Duration::from_millis(10));
        assert_eq!(poll_once(delay.delay_async(0)), Poll::Ready(()));
        assert_eq!(poll_once(delay.delay_async(5)), Poll::Ready(()));
        assert_eq!(poll_once(delay.delay_async(25)), Poll::Pending);
    }

    #[test]
    fn test_async_delay_waits_for_whole_ticks() {
        let delay = TickDelay::new(Duration::from_millis(10));

        let start = std::time::Instant::now();
        block_on(delay.delay_async(5));
        assert!(start.elapsed() < std::time::Duration::from_millis(5));

        let start = std::time::Instant::now();
        block_on(delay.delay_async(25));
        assert!(start.elapsed() >= std::time::Duration::from_millis(20));
    }

    #[test]
    fn test_strip_async_delay_uses_configured_tick() {
        let config = StripConfig {
            tick_period: Duration::from_millis(20),
            ..StripConfig::default()
        };
        let strip: GrbStrip<Sink, 1> = NeoPixel::with_config(Sink, &config);

        assert_eq!(poll_once(strip.delay_async(19)), Poll::Ready(()));

        let start = std::time::Instant::now();
        block_on(strip.delay_async(45));
        assert!(start.elapsed() >= std::time::Duration::from_millis(40));
    }
}
