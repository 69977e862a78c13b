mod tests {
    use myrtio_light_sync::math8::{blend8, fraction8};

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_fraction8() {
        assert_eq!(fraction8(0, 1024), 0);
        assert_eq!(fraction8(512, 1024), 127);
        assert_eq!(fraction8(1023, 1024), 254);
        // Wraps around the period
        assert_eq!(fraction8(1024 + 512, 1024), 127);
    }

    #[test]
    fn test_fraction8_empty_period() {
        assert_eq!(fraction8(100, 0), 0);
    }
}
