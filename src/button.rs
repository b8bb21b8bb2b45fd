//! Button gestures from a polled level
//!
//! The joystick button is sampled once per frame together with the axes.
//! [`ButtonTracker`] debounces that level and turns it into clicks, double
//! clicks and long presses. At most one gesture comes out of a tick.

use embassy_time::{Duration, Instant};

pub const BUTTON_DEBOUNCE_DELAY: Duration = Duration::from_millis(30);
pub const LONG_PRESS_DURATION: Duration = Duration::from_millis(1000);
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonTimings {
    /// How long a level must stay unchanged to count
    pub debounce: Duration,
    /// Hold time of a long press
    pub long_press: Duration,
    /// Max gap between the first release and the second press
    pub double_click: Duration,
}

impl ButtonTimings {
    pub const DEFAULT: Self = Self {
        debounce: BUTTON_DEBOUNCE_DELAY,
        long_press: LONG_PRESS_DURATION,
        double_click: DOUBLE_CLICK_WINDOW,
    };
}

impl Default for ButtonTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonGesture {
    Click,
    DoubleClick,
    LongPress,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GestureState {
    Idle,
    Pressed {
        since: Instant,
        second: bool,
        long_fired: bool,
    },
    Released {
        at: Instant,
    },
}

/// Debounced click / double-click / long-press detector
#[derive(Debug, Clone)]
pub struct ButtonTracker {
    timings: ButtonTimings,
    raw: bool,
    raw_since: Instant,
    stable: bool,
    state: GestureState,
}

impl ButtonTracker {
    pub const fn new(timings: ButtonTimings) -> Self {
        Self {
            timings,
            raw: false,
            raw_since: Instant::from_ticks(0),
            stable: false,
            state: GestureState::Idle,
        }
    }

    /// Debounced level
    pub const fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Feed the level read at `now`
    pub fn update(&mut self, pressed: bool, now: Instant) -> Option<ButtonGesture> {
        if pressed != self.raw {
            self.raw = pressed;
            self.raw_since = now;
        }

        if self.raw != self.stable
            && now.saturating_duration_since(self.raw_since) >= self.timings.debounce
        {
            self.stable = self.raw;
            return if self.stable {
                self.on_press(now)
            } else {
                self.on_release(now)
            };
        }

        self.on_steady(now)
    }

    fn on_press(&mut self, now: Instant) -> Option<ButtonGesture> {
        let second = match self.state {
            GestureState::Released { at } => {
                if now.saturating_duration_since(at) <= self.timings.double_click {
                    true
                } else {
                    // Window ran out on this very tick: report the first
                    // click and treat this press as a new one.
                    self.state = Self::pressed(now, false);
                    return Some(ButtonGesture::Click);
                }
            }
            _ => false,
        };
        self.state = Self::pressed(now, second);
        None
    }

    fn on_release(&mut self, now: Instant) -> Option<ButtonGesture> {
        let GestureState::Pressed {
            second, long_fired, ..
        } = self.state
        else {
            return None;
        };
        if second {
            self.state = GestureState::Idle;
            Some(ButtonGesture::DoubleClick)
        } else if long_fired {
            self.state = GestureState::Idle;
            None
        } else {
            self.state = GestureState::Released { at: now };
            None
        }
    }

    fn on_steady(&mut self, now: Instant) -> Option<ButtonGesture> {
        match self.state {
            GestureState::Pressed {
                since,
                second: false,
                long_fired: false,
            } if now.saturating_duration_since(since) >= self.timings.long_press => {
                self.state = GestureState::Pressed {
                    since,
                    second: false,
                    long_fired: true,
                };
                Some(ButtonGesture::LongPress)
            }
            GestureState::Released { at }
                if now.saturating_duration_since(at) > self.timings.double_click =>
            {
                self.state = GestureState::Idle;
                Some(ButtonGesture::Click)
            }
            _ => None,
        }
    }

    const fn pressed(since: Instant, second: bool) -> GestureState {
        GestureState::Pressed {
            since,
            second,
            long_fired: false,
        }
    }
}

impl Default for ButtonTracker {
    fn default() -> Self {
        Self::new(ButtonTimings::DEFAULT)
    }
}
