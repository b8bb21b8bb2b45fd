mod common;

mod tests {
    use eyeclock_composer::color::Rgb;
    use eyeclock_composer::{
        Controller, ControllerConfig, DEFAULT_LED_COUNT, DisplayMode, Duration, FrameScheduler,
        JoystickSample, JoystickSource, OutputDriver, SegmentMap,
    };

    use crate::common::{DemoDisplay, MAIN_COLOR, at, centered};

    struct ScriptedJoystick {
        sample: JoystickSample,
        reads: usize,
    }

    impl JoystickSource for ScriptedJoystick {
        fn sample(&mut self) -> JoystickSample {
            self.reads += 1;
            self.sample
        }
    }

    #[derive(Default)]
    struct RecordingDriver {
        writes: usize,
        last: Vec<Rgb>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.writes += 1;
            self.last = colors.to_vec();
        }
    }

    type Scheduler = FrameScheduler<DemoDisplay, ScriptedJoystick, RecordingDriver, DEFAULT_LED_COUNT>;

    fn scheduler() -> Scheduler {
        let controller = Controller::new(
            SegmentMap::default(),
            DemoDisplay::new(),
            &ControllerConfig::default(),
        );
        let joystick = ScriptedJoystick {
            sample: centered(false),
            reads: 0,
        };
        FrameScheduler::new(controller, joystick, RecordingDriver::default())
    }

    #[test]
    fn test_tick_samples_and_writes() {
        let mut scheduler = scheduler();
        let result = scheduler.tick(at(0));

        assert_eq!(result.mode, DisplayMode::Main);
        assert_eq!(scheduler.joystick_mut().reads, 1);
        assert_eq!(scheduler.output().writes, 1);
        assert_eq!(scheduler.output().last.len(), DEFAULT_LED_COUNT);
        assert_eq!(scheduler.output().last[121], MAIN_COLOR);
        assert_eq!(scheduler.frame()[121], MAIN_COLOR);
    }

    #[test]
    fn test_frame_pacing() {
        let mut scheduler = scheduler();

        let result = scheduler.tick(at(0));
        assert_eq!(result.next_deadline, at(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));

        let result = scheduler.tick(at(25));
        assert_eq!(result.next_deadline, at(40));
        assert_eq!(result.sleep_duration, Duration::from_millis(15));

        // Behind schedule but within two frames: no sleep, keep the cadence
        let result = scheduler.tick(at(75));
        assert_eq!(result.next_deadline, at(60));
        assert_eq!(result.sleep_duration, Duration::from_millis(0));
    }

    #[test]
    fn test_drift_correction_after_stall() {
        let mut scheduler = scheduler();
        scheduler.tick(at(0));
        let result = scheduler.tick(at(500));
        assert_eq!(result.next_deadline, at(520));
        assert_eq!(result.sleep_duration, Duration::from_millis(20));
    }

    #[test]
    fn test_custom_interval() {
        let controller = Controller::new(
            SegmentMap::default(),
            DemoDisplay::new(),
            &ControllerConfig::default(),
        );
        let joystick = ScriptedJoystick {
            sample: centered(false),
            reads: 0,
        };
        let mut scheduler: Scheduler = FrameScheduler::with_frame_duration(
            controller,
            joystick,
            RecordingDriver::default(),
            Duration::from_millis(10),
        );
        assert_eq!(scheduler.tick(at(0)).next_deadline, at(10));
        assert_eq!(scheduler.controller().display().frames, 1);
    }
}
