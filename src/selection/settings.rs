use super::category::{Category, SlotMap, ValueRange};
use crate::angle::CLOCK_POSITIONS;

/// Ranges and slot counts of the numeric categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsConfig {
    pub brightness: ValueRange,
    pub speed: ValueRange,
    /// Selectable speed positions, at most 12
    pub speed_levels: u8,
}

impl SettingsConfig {
    pub const DEFAULT: Self = Self {
        brightness: ValueRange::new(16, 255),
        speed: ValueRange::new(1, 10),
        speed_levels: 10,
    };

    /// Slots and values of a category
    ///
    /// Registry categories need the current entry count.
    pub fn slot_map(&self, category: Category, patterns: usize, palettes: usize) -> SlotMap {
        match category {
            Category::Brightness => SlotMap::new(CLOCK_POSITIONS, self.brightness),
            Category::Speed => SlotMap::new(self.speed_levels, self.speed),
            Category::Pattern => SlotMap::for_registry(patterns),
            Category::Palette => SlotMap::for_registry(palettes),
        }
    }
}

impl Default for SettingsConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Committed values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    brightness: u8,
    speed: u8,
    pattern: usize,
    palette: usize,
}

impl Settings {
    pub const fn new(brightness: u8, speed: u8, pattern: usize, palette: usize) -> Self {
        Self {
            brightness,
            speed,
            pattern,
            palette,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn speed(&self) -> u8 {
        self.speed
    }

    pub const fn pattern(&self) -> usize {
        self.pattern
    }

    pub const fn palette(&self) -> usize {
        self.palette
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn set_speed(&mut self, speed: u8) {
        self.speed = speed;
    }

    pub fn set_pattern(&mut self, pattern: usize) {
        self.pattern = pattern;
    }

    pub fn set_palette(&mut self, palette: usize) {
        self.palette = palette;
    }

    /// Current value of a category, as shown on the clock
    #[allow(clippy::cast_possible_truncation)]
    pub fn value_of(&self, category: Category) -> u16 {
        match category {
            Category::Brightness => u16::from(self.brightness),
            Category::Speed => u16::from(self.speed),
            Category::Pattern => self.pattern.min(u16::MAX as usize) as u16,
            Category::Palette => self.palette.min(u16::MAX as usize) as u16,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(128, 5, 0, 0)
    }
}
