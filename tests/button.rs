mod tests {
    use eyeclock_composer::{ButtonGesture, ButtonTracker, Instant};

    fn feed(tracker: &mut ButtonTracker, events: &[(bool, u64)]) -> Vec<(u64, ButtonGesture)> {
        events
            .iter()
            .filter_map(|&(pressed, ms)| {
                tracker
                    .update(pressed, Instant::from_millis(ms))
                    .map(|gesture| (ms, gesture))
            })
            .collect()
    }

    #[test]
    fn test_debounce_ignores_bounces() {
        let mut tracker = ButtonTracker::default();
        feed(&mut tracker, &[(true, 0), (false, 10), (true, 20), (true, 45)]);
        assert!(!tracker.is_pressed());
        feed(&mut tracker, &[(true, 50)]);
        assert!(tracker.is_pressed());
    }

    #[test]
    fn test_click_after_window() {
        let mut tracker = ButtonTracker::default();
        let gestures = feed(
            &mut tracker,
            &[(true, 0), (true, 30), (false, 100), (false, 130), (false, 430), (false, 431)],
        );
        assert_eq!(gestures, vec![(431, ButtonGesture::Click)]);
    }

    #[test]
    fn test_double_click() {
        let mut tracker = ButtonTracker::default();
        let gestures = feed(
            &mut tracker,
            &[
                (true, 0),
                (true, 30),
                (false, 100),
                (false, 130),
                (true, 200),
                (true, 230),
                (false, 300),
                (false, 330),
                (false, 1000),
            ],
        );
        assert_eq!(gestures, vec![(330, ButtonGesture::DoubleClick)]);
    }

    #[test]
    fn test_slow_second_press_is_two_clicks() {
        let mut tracker = ButtonTracker::default();
        let gestures = feed(
            &mut tracker,
            &[
                (true, 0),
                (true, 30),
                (false, 100),
                (false, 130),
                (true, 500),
                (true, 530),
                (false, 600),
                (false, 630),
                (false, 1000),
            ],
        );
        assert_eq!(
            gestures,
            vec![(500, ButtonGesture::Click), (1000, ButtonGesture::Click)]
        );
    }

    #[test]
    fn test_long_press_fires_once() {
        let mut tracker = ButtonTracker::default();
        let gestures = feed(
            &mut tracker,
            &[
                (true, 0),
                (true, 30),
                (true, 1029),
                (true, 1030),
                (true, 1500),
                (false, 1600),
                (false, 1630),
                (false, 3000),
            ],
        );
        assert_eq!(gestures, vec![(1030, ButtonGesture::LongPress)]);
    }
}
