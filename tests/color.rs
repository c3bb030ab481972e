mod tests {
    use neopixel_compat::PixelType;
    use neopixel_compat::color::{
        BgrOrder, ColorOrder, GrbOrder, Rgb, RgbOrder, color_hsv, pack_rgb, pack_rgbw,
        rgb_from_u32, rgb_to_u32,
    };

    const TEAL: Rgb = Rgb {
        r: 10,
        g: 20,
        b: 30,
    };

    #[test]
    fn test_packing() {
        assert_eq!(pack_rgb(10, 20, 30), 0x000A_141E);
        assert_eq!(pack_rgbw(10, 20, 30, 40), 0x280A_141E);
        assert_eq!(rgb_to_u32(TEAL), 0x000A_141E);
        assert_eq!(rgb_from_u32(0x000A_141E), TEAL);
        assert_eq!(rgb_from_u32(0xFF0A_141E), TEAL);
    }

    #[test]
    fn test_color_orders() {
        assert_eq!(GrbOrder::encode(TEAL), [20, 10, 30]);
        assert_eq!(RgbOrder::encode(TEAL), [10, 20, 30]);
        assert_eq!(BgrOrder::encode(TEAL), [30, 20, 10]);

        assert_eq!(GrbOrder::decode([20, 10, 30]), TEAL);
        assert_eq!(BgrOrder::decode([30, 20, 10]), TEAL);
    }

    #[test]
    fn test_color_hsv() {
        assert_eq!(color_hsv(0, 255, 0), 0);
        assert_eq!(color_hsv(0xC000, 255, 0), 0);
        assert_eq!(color_hsv(0x4000, 200, 255) >> 24, 0);
    }

    #[test]
    fn test_pixel_type_flags() {
        assert_eq!(PixelType::GRB.bits(), 0x52);
        assert_eq!(PixelType::RGBW.bits(), 0xC6);
        assert_eq!((PixelType::GRB | PixelType::KHZ400).bits(), 0x0152);
        assert!(!PixelType::GRB.has_white());
        assert!(!PixelType::BGR.has_white());
        assert!(PixelType::GRBW.has_white());
    }
}
