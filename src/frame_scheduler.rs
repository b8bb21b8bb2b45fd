//! Control loop pacing.
//!
//! One joystick poll, one controller tick and one driver write per frame,
//! without async/await or platform timers. The caller sleeps between frames.

use embassy_time::{Duration, Instant};

use crate::color::Rgb;
use crate::controller::{Controller, DisplayMode, MainDisplay};
use crate::joystick::JoystickSource;
use crate::OutputDriver;

/// Default poll interval (50 Hz).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Mode drawn in this frame.
    pub mode: DisplayMode,
}

/// Portable control loop that manages timing without async.
///
/// Every tick reads one joystick sample, runs the controller on it and
/// writes the resulting buffer to the output driver.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::<_, _, _, 145>::new(controller, joystick, driver);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<D, J, O, const LED_COUNT: usize>
where
    D: MainDisplay,
    J: JoystickSource,
    O: OutputDriver,
{
    controller: Controller<D>,
    joystick: J,
    output: O,
    frame_buffer: [Rgb; LED_COUNT],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<D, J, O, const LED_COUNT: usize> FrameScheduler<D, J, O, LED_COUNT>
where
    D: MainDisplay,
    J: JoystickSource,
    O: OutputDriver,
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_POLL_INTERVAL` for frame timing.
    pub fn new(controller: Controller<D>, joystick: J, driver: O) -> Self {
        Self::with_frame_duration(controller, joystick, driver, DEFAULT_POLL_INTERVAL)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        controller: Controller<D>,
        joystick: J,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        debug_assert!(
            controller.map().led_count() <= LED_COUNT,
            "frame buffer is shorter than the LED chain"
        );
        Self {
            controller,
            joystick,
            output: driver,
            frame_buffer: [Rgb::default(); LED_COUNT],
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Samples the joystick and runs the controller
    /// 3. Writes to the output driver
    /// 4. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Skip the backlog after a stall instead of bursting through it
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let sample = self.joystick.sample();
        let mode = self.controller.tick(now, &sample, &mut self.frame_buffer);
        let led_count = self.controller.map().led_count().min(LED_COUNT);
        self.output.write(&self.frame_buffer[..led_count]);

        self.next_frame += self.frame_duration;

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration: self.next_frame.saturating_duration_since(now),
            mode,
        }
    }

    /// Last frame written to the driver
    pub fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    pub fn controller(&self) -> &Controller<D> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<D> {
        &mut self.controller
    }

    pub fn joystick_mut(&mut self) -> &mut J {
        &mut self.joystick
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
