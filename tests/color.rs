mod tests {
    use myrtio_light_sync::color::{BLACK, Rgb, blend_colors, fill_rainbow, fill_solid, hsv};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );

        assert_eq!(
            blend_colors(BLACK, WHITE, 128),
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
    }

    #[test]
    fn test_fill_solid() {
        let mut leds = [BLACK; 5];
        fill_solid(&mut leds, RED);
        assert_eq!(leds, [RED; 5]);
    }

    #[test]
    fn test_fill_rainbow_steps_hue() {
        let mut leds = [BLACK; 4];
        fill_rainbow(&mut leds, 250, 4);
        assert_eq!(leds[0], hsv(250, 240, 255));
        assert_eq!(leds[1], hsv(254, 240, 255));
        // Hue wraps around the wheel
        assert_eq!(leds[2], hsv(2, 240, 255));
        assert_eq!(leds[3], hsv(6, 240, 255));
    }

    #[test]
    fn test_fill_rainbow_empty() {
        let mut leds: [Rgb; 0] = [];
        fill_rainbow(&mut leds, 0, 32);
    }
}
