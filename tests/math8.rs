mod tests {
    use neopixel_compat::math8::{SINE_TABLE, scale8, sine8};

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_scale8_full_scale_is_identity() {
        for value in 0..=255u8 {
            assert_eq!(scale8(value, 255), value);
            assert_eq!(scale8(value, 0), 0);
        }
    }

    #[test]
    fn test_sine8_landmarks() {
        assert_eq!(sine8(0), 128);
        assert_eq!(sine8(64), 255);
        assert_eq!(sine8(128), 128);
        assert_eq!(sine8(192), 0);
    }

    #[test]
    fn test_sine8_is_total() {
        for x in 0..=255u8 {
            assert_eq!(sine8(x), SINE_TABLE[usize::from(x)]);
        }
    }

    #[test]
    fn test_sine8_symmetry() {
        // Rising and falling quarters mirror each other around the peak.
        for i in 1..64u8 {
            assert_eq!(sine8(64 - i), sine8(64 + i));
        }
        for i in 1..64u8 {
            assert_eq!(sine8(192 - i), sine8(192 + i));
        }
    }
}
