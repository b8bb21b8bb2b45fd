use crate::angle::CLOCK_POSITIONS;
use crate::color::{Rgb, rgb_from_u32};

const CATEGORY_NAME_BRIGHTNESS: &str = "brightness";
const CATEGORY_NAME_SPEED: &str = "speed";
const CATEGORY_NAME_PATTERN: &str = "pattern";
const CATEGORY_NAME_PALETTE: &str = "palette";

/// Setting chosen in the first menu phase, one per quadrant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Category {
    Brightness = 0,
    Speed = 1,
    Pattern = 2,
    Palette = 3,
}

impl Category {
    /// Categories in quadrant order
    pub const ALL: [Self; 4] = [Self::Brightness, Self::Speed, Self::Pattern, Self::Palette];

    pub fn from_quadrant(quadrant: u8) -> Option<Self> {
        Self::ALL.get(usize::from(quadrant)).copied()
    }

    pub const fn quadrant(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => CATEGORY_NAME_BRIGHTNESS,
            Self::Speed => CATEGORY_NAME_SPEED,
            Self::Pattern => CATEGORY_NAME_PATTERN,
            Self::Palette => CATEGORY_NAME_PALETTE,
        }
    }

    /// Color the category is drawn in
    pub const fn color(self) -> Rgb {
        match self {
            Self::Brightness => rgb_from_u32(0xFF_FF_FF),
            Self::Speed => rgb_from_u32(0x00_FF_40),
            Self::Pattern => rgb_from_u32(0xFF_00_C0),
            Self::Palette => rgb_from_u32(0x00_C0_FF),
        }
    }
}

/// Inclusive range of values a category can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u16,
    pub max: u16,
}

impl ValueRange {
    pub const fn new(min: u16, max: u16) -> Self {
        Self { min, max }
    }

    /// Number of distinct values
    pub const fn span(self) -> u32 {
        if self.max < self.min {
            return 1;
        }
        (self.max - self.min) as u32 + 1
    }

    pub const fn clamp(self, value: u16) -> u16 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// How the buckets of a [`SlotMap`] divide its value range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSpread {
    /// Each bucket covers an equal share of the range
    Even,
    /// The first and last bucket land on `min` and `max`
    Endpoints,
}

/// Selectable clock positions of a category and the values behind them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotMap {
    /// Number of valid buckets, counted from 12 o'clock
    pub slots: u8,
    pub range: ValueRange,
    pub spread: SlotSpread,
}

impl SlotMap {
    /// Numeric slots reaching both ends of `range`
    pub const fn new(slots: u8, range: ValueRange) -> Self {
        Self::with_spread(slots, range, SlotSpread::Endpoints)
    }

    pub const fn with_spread(slots: u8, range: ValueRange, spread: SlotSpread) -> Self {
        let slots = if slots > CLOCK_POSITIONS {
            CLOCK_POSITIONS
        } else {
            slots
        };
        Self {
            slots,
            range,
            spread,
        }
    }

    /// Slots spread over every entry of a registry
    ///
    /// All twelve positions are valid as long as the registry is not empty.
    #[allow(clippy::cast_possible_truncation)]
    pub fn for_registry(count: usize) -> Self {
        if count == 0 {
            return Self::with_spread(0, ValueRange::new(0, 0), SlotSpread::Even);
        }
        let last = count.min(u16::MAX as usize) - 1;
        Self::with_spread(
            CLOCK_POSITIONS,
            ValueRange::new(0, last as u16),
            SlotSpread::Even,
        )
    }

    pub const fn accepts(&self, bucket: u8) -> bool {
        bucket < self.slots
    }

    /// Value selected by a bucket, `None` for buckets outside the slots
    #[allow(clippy::cast_possible_truncation)]
    pub fn value_for_bucket(&self, bucket: u8) -> Option<u16> {
        if !self.accepts(bucket) {
            return None;
        }
        let (steps, divisions) = self.proportion();
        let offset = if divisions == 0 {
            0
        } else {
            u32::from(bucket) * steps / divisions
        };
        let value = u32::from(self.range.min) + offset;
        Some(self.range.clamp(value.min(u32::from(u16::MAX)) as u16))
    }

    /// First bucket whose value reaches `value`
    ///
    /// Used to show where a committed value sits on the clock.
    #[allow(clippy::cast_possible_truncation)]
    pub fn bucket_for_value(&self, value: u16) -> u8 {
        let (steps, divisions) = self.proportion();
        if self.slots == 0 || steps == 0 {
            return 0;
        }
        let offset = u32::from(self.range.clamp(value) - self.range.min);
        let bucket = (offset * divisions).div_ceil(steps);
        bucket.min(u32::from(self.slots) - 1) as u8
    }

    /// Value steps per bucket steps, as `(steps, divisions)`
    fn proportion(&self) -> (u32, u32) {
        let slots = u32::from(self.slots);
        match self.spread {
            SlotSpread::Even => (self.range.span(), slots),
            SlotSpread::Endpoints => (self.range.span() - 1, slots.saturating_sub(1)),
        }
    }
}
