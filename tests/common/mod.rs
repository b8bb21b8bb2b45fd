#![allow(dead_code)]

use eyeclock_composer::color::{Rgb, rgb_from_u32};
use eyeclock_composer::{
    Instant, JoystickSample, MainDisplay, NamedRegistry, SegmentId, SegmentMap, Settings,
};

pub const PATTERNS: &[&str] = &["solid", "rainbow", "comet", "sparkle", "breathe"];
pub const PALETTES: &[&str] = &["sunset", "ocean", "forest"];

pub const MAIN_COLOR: Rgb = rgb_from_u32(0x00FF00);

pub const CENTER: i32 = 2048;

/// Sample deflected by `(dx, dy)` from the center, `dy` pointing up
pub fn deflected(dx: i32, dy: i32) -> JoystickSample {
    JoystickSample::new(CENTER + dx, CENTER + dy, false)
}

pub fn centered(pressed: bool) -> JoystickSample {
    JoystickSample::new(CENTER, CENTER, pressed)
}

pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// Main display that paints the pole and counts frames
pub struct DemoDisplay {
    pub patterns: NamedRegistry<'static>,
    pub palettes: NamedRegistry<'static>,
    pub frames: usize,
}

impl DemoDisplay {
    pub fn new() -> Self {
        Self {
            patterns: NamedRegistry::new(PATTERNS),
            palettes: NamedRegistry::new(PALETTES),
            frames: 0,
        }
    }
}

impl MainDisplay for DemoDisplay {
    type Patterns = NamedRegistry<'static>;
    type Palettes = NamedRegistry<'static>;

    fn registries(&self) -> (&Self::Patterns, &Self::Palettes) {
        (&self.patterns, &self.palettes)
    }

    fn registries_mut(&mut self) -> (&mut Self::Patterns, &mut Self::Palettes) {
        (&mut self.patterns, &mut self.palettes)
    }

    fn render(&mut self, _now: Instant, _settings: &Settings, map: &SegmentMap, leds: &mut [Rgb]) {
        self.frames += 1;
        map.fill(leds, SegmentId::Pole, MAIN_COLOR);
    }
}
