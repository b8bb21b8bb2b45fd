mod tests {
    use eyeclock_composer::color::{BLACK, Rgb, scale_color};
    use eyeclock_composer::layout::total_leds;
    use eyeclock_composer::segment::{TRAIL_SCALE, pointer_span};
    use eyeclock_composer::{
        DEFAULT_LED_COUNT, DEFAULT_WIRING, Error, RingWiring, SegmentId, SegmentMap, Winding,
    };
    use test_case::test_case;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn dimmed(color: Rgb) -> Rgb {
        scale_color(color, TRAIL_SCALE)
    }

    #[test]
    fn test_default_wiring_size() {
        let map = SegmentMap::default();
        assert_eq!(DEFAULT_LED_COUNT, 145);
        assert_eq!(map.led_count(), DEFAULT_LED_COUNT);
        assert_eq!(total_leds(&DEFAULT_WIRING), DEFAULT_LED_COUNT);
    }

    #[test]
    fn test_every_raw_index_has_one_segment() {
        let map = SegmentMap::default();
        for raw in 0..map.led_count() {
            let owners = map.segments().filter(|segment| segment.contains(raw)).count();
            assert_eq!(owners, 1, "raw index {raw} has {owners} owners");

            let segment = map.segment_for(raw).unwrap();
            assert!(segment.start() <= raw && raw <= segment.end());
        }
        assert!(map.segment_for(map.led_count()).is_none());
    }

    #[test]
    fn test_logical_to_raw_is_a_bijection() {
        let map = SegmentMap::default();
        for segment in map.segments() {
            let mut seen = [false; DEFAULT_LED_COUNT];
            for logical in 0..segment.count() {
                let raw = segment.raw_index(logical).unwrap();
                assert!(segment.contains(raw), "{} maps outside itself", segment.name());
                assert!(!seen[raw], "{} maps twice onto {raw}", segment.name());
                seen[raw] = true;
            }
            let covered = seen.iter().filter(|&&hit| hit).count();
            assert_eq!(covered, segment.count());
        }
    }

    #[test]
    fn test_position_round_trip() {
        let map = SegmentMap::default();
        for id in SegmentId::ALL {
            for logical in 0..map.segment(id).count() {
                let position = map.position_of(id, logical).unwrap();
                assert_eq!(
                    map.raw_index_at(id, position).unwrap(),
                    map.raw_index(id, logical).unwrap(),
                    "{} logical {logical}",
                    id.as_str()
                );
            }
        }
    }

    #[test_case(SegmentId::Clock, 0, 30; "clock top")]
    #[test_case(SegmentId::Clock, 15, 45; "clock three o'clock")]
    #[test_case(SegmentId::Clock, 30, 0; "clock wraps to chain start")]
    #[test_case(SegmentId::Clock, 59, 29; "clock last")]
    #[test_case(SegmentId::Eye0, 0, 60; "outer eye top")]
    #[test_case(SegmentId::Eye0, 1, 83; "outer eye runs backwards")]
    #[test_case(SegmentId::Eye2, 3, 109; "counter-clockwise ring")]
    #[test_case(SegmentId::Eye4, 0, 120; "pupil")]
    #[test_case(SegmentId::Pole, 0, 121; "pole bottom")]
    #[test_case(SegmentId::Pole, 23, 144; "pole top")]
    fn test_default_raw_index(id: SegmentId, logical: usize, raw: usize) {
        let map = SegmentMap::default();
        assert_eq!(map.raw_index(id, logical), Ok(raw));
    }

    #[test]
    fn test_raw_index_out_of_range() {
        let map = SegmentMap::default();
        assert_eq!(
            map.raw_index(SegmentId::Eye4, 1),
            Err(Error::LogicalIndexOutOfRange { index: 1, count: 1 })
        );
        assert_eq!(
            map.raw_index(SegmentId::Clock, 60),
            Err(Error::LogicalIndexOutOfRange {
                index: 60,
                count: 60
            })
        );
        assert_eq!(
            map.raw_index_at(SegmentId::Clock, 1.5),
            Err(Error::PositionOutOfRange(1.5))
        );
        assert!(map.raw_index_at(SegmentId::Clock, -0.1).is_err());
        assert!(map.raw_index_at(SegmentId::Clock, f32::NAN).is_err());
    }

    #[test]
    fn test_position_one_wraps_to_top() {
        let map = SegmentMap::default();
        assert_eq!(map.raw_index_at(SegmentId::Clock, 1.0), Ok(30));
        assert_eq!(map.raw_index_at(SegmentId::Eye4, 0.7), Ok(120));
    }

    #[test]
    fn test_eight_led_ring_wired_from_five() {
        let wiring = [
            RingWiring::new(SegmentId::Clock, 8, 5, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye0, 4, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye1, 4, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye2, 2, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye3, 2, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye4, 1, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Pole, 3, 0, Winding::Clockwise),
        ];
        let map = SegmentMap::new(&wiring);

        assert_eq!(map.raw_index(SegmentId::Clock, 0), Ok(5));
        assert_eq!(map.raw_index(SegmentId::Clock, 2), Ok(7));
        assert_eq!(map.raw_index(SegmentId::Clock, 4), Ok(1));
        assert_eq!(map.segment(SegmentId::Eye0).start(), 8);
        assert_eq!(map.led_count(), 24);
    }

    #[test]
    fn test_oversized_segment_is_capped() {
        let wiring = [
            RingWiring::new(SegmentId::Clock, 8, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye0, 4, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye1, 4, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye2, 2, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye3, 2, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Eye4, 1, 0, Winding::Clockwise),
            RingWiring::new(SegmentId::Pole, 70, 0, Winding::Clockwise),
        ];
        let map = SegmentMap::new(&wiring);
        let pole = map.segment(SegmentId::Pole);

        assert_eq!(pole.count(), 64);
        assert_eq!(pole.end(), 21 + 63);
        assert_eq!(map.raw_index(SegmentId::Pole, 63), Ok(21 + 63));
        assert!(map.raw_index(SegmentId::Pole, 64).is_err());
        assert_eq!(map.led_count(), 21 + 64);
    }

    #[test]
    fn test_chain_order_sets_starts() {
        let mut wiring = DEFAULT_WIRING;
        wiring.swap(0, 6);
        let map = SegmentMap::new(&wiring);
        assert_eq!(map.segment(SegmentId::Pole).start(), 0);
        assert_eq!(map.segment(SegmentId::Pole).end(), 23);
        assert_eq!(map.segment(SegmentId::Clock).start(), 85);
        assert_eq!(map.led_count(), DEFAULT_LED_COUNT);
    }

    #[test]
    fn test_pointer_span_widths() {
        let odd = pointer_span(3, 0.9);
        assert_eq!((odd.first, odd.last), (-1, 1));
        assert!(odd.is_full(0) && !odd.is_full(1) && !odd.is_full(-1));

        let forward = pointer_span(4, 0.5);
        assert_eq!((forward.first, forward.last), (-1, 2));
        assert_eq!((forward.full_first, forward.full_last), (0, 1));

        let backward = pointer_span(4, 0.2);
        assert_eq!((backward.first, backward.last), (-2, 1));
        assert_eq!((backward.full_first, backward.full_last), (-1, 0));
    }

    #[test]
    fn test_paint_odd_width_wraps() {
        let map = SegmentMap::default();
        let mut leds = [BLACK; DEFAULT_LED_COUNT];
        map.paint_at(&mut leds, SegmentId::Clock, 0.0, RED, 5).unwrap();

        assert_eq!(leds[30], RED);
        assert_eq!(leds[29], dimmed(RED));
        assert_eq!(leds[28], dimmed(RED));
        assert_eq!(leds[31], dimmed(RED));
        assert_eq!(leds[32], dimmed(RED));
        assert_eq!(leds[27], BLACK);
        assert_eq!(leds[33], BLACK);
        assert_eq!(leds.iter().filter(|&&led| led != BLACK).count(), 5);
    }

    #[test]
    fn test_paint_even_width_follows_fraction() {
        let map = SegmentMap::default();

        // 4.5 LEDs into the 8-LED ring: the extra pixel goes forward
        let mut leds = [BLACK; DEFAULT_LED_COUNT];
        map.paint_at(&mut leds, SegmentId::Eye3, 0.5625, RED, 4).unwrap();
        assert_eq!(leds[117], dimmed(RED));
        assert_eq!(leds[118], RED);
        assert_eq!(leds[119], RED);
        assert_eq!(leds[112], dimmed(RED));

        let mut leds = [BLACK; DEFAULT_LED_COUNT];
        map.paint_at(&mut leds, SegmentId::Eye3, 0.5, RED, 4).unwrap();
        assert_eq!(leds[116], dimmed(RED));
        assert_eq!(leds[117], RED);
        assert_eq!(leds[118], RED);
        assert_eq!(leds[119], dimmed(RED));
    }

    #[test]
    fn test_paint_width_clamped_to_segment() {
        let map = SegmentMap::default();
        let mut leds = [BLACK; DEFAULT_LED_COUNT];
        map.paint_at(&mut leds, SegmentId::Eye3, 0.0, RED, 20).unwrap();
        assert!(leds[112..=119].iter().all(|&led| led != BLACK));
        assert_eq!(leds[111], BLACK);
        assert_eq!(leds[120], BLACK);
    }

    #[test]
    fn test_paint_failure_leaves_buffer() {
        let map = SegmentMap::default();
        let mut leds = [BLACK; DEFAULT_LED_COUNT];
        assert_eq!(
            map.paint_at(&mut leds, SegmentId::Clock, 1.5, RED, 3),
            Err(Error::PositionOutOfRange(1.5))
        );
        assert!(matches!(
            map.paint_at(&mut leds, SegmentId::Clock, f32::NAN, RED, 3),
            Err(Error::PositionOutOfRange(_))
        ));
        assert!(leds.iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_short_buffer_is_not_overrun() {
        let map = SegmentMap::default();
        let mut leds = [BLACK; 100];
        map.fill(&mut leds, SegmentId::Pole, RED);
        map.paint_at(&mut leds, SegmentId::Eye2, 0.0, RED, 3).unwrap();
        assert!(leds.iter().all(|&led| led == BLACK));
    }

    #[test]
    fn test_paint_at_angle_per_segment() {
        let map = SegmentMap::default();
        let mut leds = [BLACK; DEFAULT_LED_COUNT];
        map.paint_at_angle(&mut leds, &[SegmentId::Eye1, SegmentId::Eye2], 450.0, RED, 1);
        assert_eq!(leds[96], RED);
        assert_eq!(leds[109], RED);
        assert_eq!(leds.iter().filter(|&&led| led != BLACK).count(), 2);
    }

    #[test]
    fn test_fill_gradient_starts_at_top() {
        let map = SegmentMap::default();
        let mut leds = [BLACK; DEFAULT_LED_COUNT];
        map.fill_gradient(&mut leds, SegmentId::Eye3, RED, BLUE);
        assert_eq!(leds[114], RED);
        assert_eq!(leds[113], BLUE);
        assert_eq!(leds[111], BLACK);
    }

    #[test]
    fn test_fill_level_and_add() {
        let map = SegmentMap::default();
        let mut leds = [BLUE; DEFAULT_LED_COUNT];
        map.fill_level(&mut leds, SegmentId::Pole, 3, RED);
        assert_eq!(leds[121..=123], [RED; 3]);
        assert_eq!(leds[124], BLACK);
        assert_eq!(leds[144], BLACK);

        map.add_at(&mut leds, SegmentId::Pole, 0, BLUE).unwrap();
        assert_eq!(leds[121], Rgb { r: 255, g: 0, b: 255 });

        map.clear_all(&mut leds);
        assert!(leds.iter().all(|&led| led == BLACK));
    }
}
