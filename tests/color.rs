mod tests {
    use eyeclock_composer::color::{
        BLACK, Rgb, add_colors, blend_colors, rgb_from_u32, scale_color,
    };

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
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
        assert_eq!(blend_colors(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_scale_color() {
        assert_eq!(scale_color(WHITE, 255), WHITE);
        assert_eq!(scale_color(WHITE, 0), BLACK);
        assert_eq!(
            scale_color(WHITE, 170),
            Rgb {
                r: 170,
                g: 170,
                b: 170
            }
        );
    }

    #[test]
    fn test_add_colors_saturates() {
        assert_eq!(add_colors(RED, BLUE), Rgb { r: 255, g: 0, b: 255 });
        assert_eq!(add_colors(WHITE, RED), WHITE);
        assert_eq!(add_colors(BLACK, BLACK), BLACK);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xFF0000), RED);
        assert_eq!(
            rgb_from_u32(0x123456),
            Rgb {
                r: 0x12,
                g: 0x34,
                b: 0x56
            }
        );
    }
}
