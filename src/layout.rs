//! Physical wiring of the sculpture
//!
//! The LEDs form one daisy chain: the clock ring, five nested eye rings
//! (outermost first) and the pole strip. Each ring was soldered starting at
//! an arbitrary LED and wound in either direction, so the wiring table
//! records which LED sits at 12 o'clock and which way the chain runs.

const SEGMENT_NAME_CLOCK: &str = "clock";
const SEGMENT_NAME_EYE0: &str = "eye0";
const SEGMENT_NAME_EYE1: &str = "eye1";
const SEGMENT_NAME_EYE2: &str = "eye2";
const SEGMENT_NAME_EYE3: &str = "eye3";
const SEGMENT_NAME_EYE4: &str = "eye4";
const SEGMENT_NAME_POLE: &str = "pole";

/// Largest LED count a single segment may have
pub const MAX_SEGMENT_LEDS: usize = 64;

/// Closed set of segments, used as a key into fixed-size tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SegmentId {
    Clock = 0,
    /// Outermost eye ring
    Eye0 = 1,
    Eye1 = 2,
    Eye2 = 3,
    Eye3 = 4,
    /// Single pupil LED in the middle of the eye
    Eye4 = 5,
    Pole = 6,
}

impl SegmentId {
    /// Number of segments
    pub const COUNT: usize = 7;

    /// All segments in key order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Clock,
        Self::Eye0,
        Self::Eye1,
        Self::Eye2,
        Self::Eye3,
        Self::Eye4,
        Self::Pole,
    ];

    /// Eye rings from outermost to the pupil
    pub const EYES: [Self; 5] = [Self::Eye0, Self::Eye1, Self::Eye2, Self::Eye3, Self::Eye4];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.get(usize::from(value)).copied()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clock => SEGMENT_NAME_CLOCK,
            Self::Eye0 => SEGMENT_NAME_EYE0,
            Self::Eye1 => SEGMENT_NAME_EYE1,
            Self::Eye2 => SEGMENT_NAME_EYE2,
            Self::Eye3 => SEGMENT_NAME_EYE3,
            Self::Eye4 => SEGMENT_NAME_EYE4,
            Self::Pole => SEGMENT_NAME_POLE,
        }
    }

    pub const fn is_eye(self) -> bool {
        matches!(
            self,
            Self::Eye0 | Self::Eye1 | Self::Eye2 | Self::Eye3 | Self::Eye4
        )
    }
}

/// Direction in which the chain advances around a ring, seen from the front
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// How one segment is wired into the chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingWiring {
    pub id: SegmentId,
    /// Number of LEDs in the segment
    pub count: u16,
    /// Offset from the segment's first LED to the LED at 12 o'clock
    pub top: u16,
    pub winding: Winding,
}

impl RingWiring {
    pub const fn new(id: SegmentId, count: u16, top: u16, winding: Winding) -> Self {
        Self {
            id,
            count,
            top,
            winding,
        }
    }

    /// LEDs addressed in the segment, at most [`MAX_SEGMENT_LEDS`]
    ///
    /// LEDs past the cap stay dark.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn led_count(&self) -> u16 {
        if self.count as usize > MAX_SEGMENT_LEDS {
            MAX_SEGMENT_LEDS as u16
        } else {
            self.count
        }
    }

    /// Offset inside the segment of a logical index, counted from 12 o'clock
    pub const fn offset_of(&self, logical: u16) -> u16 {
        let count = self.led_count();
        if count == 0 {
            return 0;
        }
        let top = self.top % count;
        let step = logical % count;
        match self.winding {
            Winding::Clockwise => (top + step) % count,
            Winding::CounterClockwise => (top + count - step) % count,
        }
    }
}

/// Wiring of the built sculpture, in chain order
pub const DEFAULT_WIRING: [RingWiring; SegmentId::COUNT] = [
    RingWiring::new(SegmentId::Clock, 60, 30, Winding::Clockwise),
    RingWiring::new(SegmentId::Eye0, 24, 0, Winding::CounterClockwise),
    RingWiring::new(SegmentId::Eye1, 16, 8, Winding::Clockwise),
    RingWiring::new(SegmentId::Eye2, 12, 0, Winding::CounterClockwise),
    RingWiring::new(SegmentId::Eye3, 8, 2, Winding::Clockwise),
    RingWiring::new(SegmentId::Eye4, 1, 0, Winding::Clockwise),
    RingWiring::new(SegmentId::Pole, 24, 0, Winding::Clockwise),
];

const _: () = {
    let mut i = 0;
    while i < DEFAULT_WIRING.len() {
        let count = DEFAULT_WIRING[i].count as usize;
        assert!(count > 0 && count <= MAX_SEGMENT_LEDS);
        i += 1;
    }
};

/// Total LEDs described by a wiring table
pub const fn total_leds(wiring: &[RingWiring]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < wiring.len() {
        total += wiring[i].led_count() as usize;
        i += 1;
    }
    total
}

/// Total LEDs of the built sculpture
pub const DEFAULT_LED_COUNT: usize = total_leds(&DEFAULT_WIRING);
