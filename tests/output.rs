mod tests {
    use neopixel_compat::{GrbStrip, NeoPixel, PixelType, Rgb, SmartLedsOutput};
    use smart_leds::{RGB8, SmartLedsWrite};

    #[derive(Default)]
    struct Ws2812 {
        written: Vec<RGB8>,
    }

    impl SmartLedsWrite for Ws2812 {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.written = iterator.into_iter().map(Into::into).collect();
            Ok(())
        }
    }

    #[test]
    fn test_smart_leds_output_receives_frame() {
        let output = SmartLedsOutput::new(Ws2812::default());
        let mut strip: GrbStrip<SmartLedsOutput<Ws2812>, 3> =
            NeoPixel::new(4, PixelType::GRB, output);
        strip.begin();
        strip.set_pixel_color(0, 255, 0, 0);
        strip.set_pixel_color(2, 0, 0, 255);
        strip.show();

        let written = &strip.bus_mut().output_mut().writer_mut().written;
        assert_eq!(
            written,
            &vec![Rgb::new(255, 0, 0), Rgb::default(), Rgb::new(0, 0, 255)]
        );
    }
}
