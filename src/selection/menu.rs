use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::category::{Category, SlotMap};
use super::session::{HoldState, Phase, SelectionSession, SelectionTimings};
use super::settings::{Settings, SettingsConfig};
use crate::angle::{AngleClassifier, CLOCK_POSITIONS, QUADRANTS};
use crate::color::{Rgb, rgb_from_u32, scale_color};
use crate::joystick::JoystickSample;
use crate::layout::SegmentId;
use crate::registry::PatternRegistry;
use crate::segment::SegmentMap;

/// Brightness levels of the menu pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyle {
    /// Width of the value pointer on the clock ring
    pub pointer_width: usize,
    /// Color added at every selectable clock position
    pub tick: Rgb,
    /// Quadrant arcs nobody points at
    pub idle_scale: u8,
    /// Last hovered bucket after the stick returned to center
    pub sticky_scale: u8,
    /// Committed value when nothing else is shown
    pub committed_scale: u8,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            pointer_width: 3,
            tick: rgb_from_u32(0x18_18_18),
            idle_scale: 24,
            sticky_scale: 96,
            committed_scale: 32,
        }
    }
}

/// Outcome of one menu tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    None,
    /// Phase 1 confirmed a category
    Entered(Category),
    /// Phase 2 committed a value, the menu is done
    Committed(Category),
}

/// Two-phase hold-to-select settings menu
#[derive(Debug, Clone)]
pub struct SettingsMenu {
    config: SettingsConfig,
    timings: SelectionTimings,
    style: MenuStyle,
    session: SelectionSession,
    settings: Settings,
}

impl SettingsMenu {
    pub fn new(
        config: SettingsConfig,
        timings: SelectionTimings,
        style: MenuStyle,
        settings: Settings,
    ) -> Self {
        Self {
            config,
            timings,
            style,
            session: SelectionSession::new(),
            settings,
        }
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    pub const fn session(&self) -> &SelectionSession {
        &self.session
    }

    pub const fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Drop every hover, hold and sticky state and go back to Phase 1
    pub fn reset(&mut self) {
        self.session = SelectionSession::new();
    }

    /// Bucket the stick points at in the current phase
    pub fn hovered_bucket(
        &self,
        classifier: &AngleClassifier,
        sample: &JoystickSample,
        slots: Option<SlotMap>,
    ) -> Option<u8> {
        match (self.session.phase(), slots) {
            (Phase::Value(_), Some(slots)) => classifier
                .classify_clock(sample, CLOCK_POSITIONS)
                .bucket()
                .filter(|&bucket| slots.accepts(bucket)),
            _ => classifier.classify_quadrant(sample).bucket(),
        }
    }

    /// Process one joystick sample
    pub fn tick<P, Q>(
        &mut self,
        now: Instant,
        classifier: &AngleClassifier,
        sample: &JoystickSample,
        patterns: &mut P,
        palettes: &mut Q,
    ) -> MenuEvent
    where
        P: PatternRegistry + ?Sized,
        Q: PatternRegistry + ?Sized,
    {
        let slots = self.current_slots(patterns.count(), palettes.count());
        let hovered = self.hovered_bucket(classifier, sample, slots);
        let (session, hold) = self.session.step(hovered, now, &self.timings);
        self.session = session;

        let HoldState::Confirmed(bucket) = hold else {
            return MenuEvent::None;
        };

        match self.session.phase() {
            Phase::Quadrant => {
                let Some(category) = Category::from_quadrant(bucket) else {
                    return MenuEvent::None;
                };
                #[cfg(feature = "esp32-log")]
                println!("[menu] category selected: {}", category.as_str());
                self.session = SelectionSession::in_phase(Phase::Value(category));
                MenuEvent::Entered(category)
            }
            Phase::Value(category) => {
                if let Some(slots) = slots {
                    self.commit(category, slots, bucket, patterns, palettes);
                }
                self.reset();
                MenuEvent::Committed(category)
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn commit<P, Q>(
        &mut self,
        category: Category,
        slots: SlotMap,
        bucket: u8,
        patterns: &mut P,
        palettes: &mut Q,
    ) where
        P: PatternRegistry + ?Sized,
        Q: PatternRegistry + ?Sized,
    {
        let Some(value) = slots.value_for_bucket(bucket) else {
            return;
        };
        match category {
            Category::Brightness => {
                self.settings.set_brightness(value.min(u16::from(u8::MAX)) as u8);
            }
            Category::Speed => self.settings.set_speed(value.min(u16::from(u8::MAX)) as u8),
            Category::Pattern => {
                if patterns.set_active(usize::from(value)).is_ok() {
                    self.settings.set_pattern(usize::from(value));
                }
            }
            Category::Palette => {
                if palettes.set_active(usize::from(value)).is_ok() {
                    self.settings.set_palette(usize::from(value));
                }
            }
        }
        #[cfg(feature = "esp32-log")]
        println!("[menu] {} set to {}", category.as_str(), value);
    }

    fn current_slots(&self, patterns: usize, palettes: usize) -> Option<SlotMap> {
        match self.session.phase() {
            Phase::Quadrant => None,
            Phase::Value(category) => Some(self.config.slot_map(category, patterns, palettes)),
        }
    }

    /// Draw the menu
    ///
    /// Only the clock ring and the pole are touched.
    pub fn render<P, Q>(&self, map: &SegmentMap, leds: &mut [Rgb], patterns: &P, palettes: &Q)
    where
        P: PatternRegistry + ?Sized,
        Q: PatternRegistry + ?Sized,
    {
        match self.session.phase() {
            Phase::Quadrant => self.render_quadrants(map, leds),
            Phase::Value(category) => {
                let slots = self
                    .config
                    .slot_map(category, patterns.count(), palettes.count());
                self.render_value(map, leds, category, slots);
            }
        }
    }

    fn render_quadrants(&self, map: &SegmentMap, leds: &mut [Rgb]) {
        let count = map.segment(SegmentId::Clock).count();
        let quadrants = usize::from(QUADRANTS);
        for category in Category::ALL {
            let quadrant = category.quadrant();
            let scale = self.highlight_scale(quadrant).unwrap_or(self.style.idle_scale);
            let color = scale_color(category.color(), scale);
            let first = usize::from(quadrant) * count / quadrants;
            let last = (usize::from(quadrant) + 1) * count / quadrants;
            for logical in first..last {
                let _ = map.set_logical(leds, SegmentId::Clock, logical, color);
            }
        }
    }

    /// Buckets come from [`crate::angle::clock_angle`], which counts
    /// counter-clockwise, while the ring is painted clockwise from 12 o'clock.
    /// Pushing right lights 9 o'clock. Both directions are intentional.
    fn render_value(&self, map: &SegmentMap, leds: &mut [Rgb], category: Category, slots: SlotMap) {
        let color = category.color();
        let (bucket, scale) = match (self.session.hovered(), self.session.sticky()) {
            (Some(bucket), _) => (bucket, if self.session.is_visible() { u8::MAX } else { 0 }),
            (None, Some(bucket)) => (bucket, self.style.sticky_scale),
            (None, None) => (
                slots.bucket_for_value(self.settings.value_of(category)),
                self.style.committed_scale,
            ),
        };

        if scale > 0 {
            let position = f32::from(bucket) / f32::from(CLOCK_POSITIONS);
            let _ = map.paint_at(
                leds,
                SegmentId::Clock,
                position,
                scale_color(color, scale),
                self.style.pointer_width,
            );
        }

        let clock = map.segment(SegmentId::Clock);
        for tick in 0..slots.slots.max(1) {
            let position = f32::from(tick) / f32::from(CLOCK_POSITIONS);
            if let Ok(logical) = clock.logical_at(position) {
                let _ = map.add_at(leds, SegmentId::Clock, logical, self.style.tick);
            }
        }

        self.render_level(map, leds, category, slots, bucket);
    }

    /// Preview of the candidate value as a bar on the pole
    #[allow(clippy::cast_possible_truncation)]
    fn render_level(
        &self,
        map: &SegmentMap,
        leds: &mut [Rgb],
        category: Category,
        slots: SlotMap,
        bucket: u8,
    ) {
        if slots.slots == 0 {
            map.clear(leds, SegmentId::Pole);
            return;
        }
        let height = map.segment(SegmentId::Pole).count();
        let lit = height * (usize::from(bucket) + 1) / usize::from(slots.slots);
        let color = match (category, slots.value_for_bucket(bucket)) {
            (Category::Brightness, Some(value)) => {
                scale_color(category.color(), value.min(u16::from(u8::MAX)) as u8)
            }
            _ => category.color(),
        };
        map.fill_level(leds, SegmentId::Pole, lit, color);
    }

    /// Scale of a highlighted quadrant, `None` when it is idle
    fn highlight_scale(&self, bucket: u8) -> Option<u8> {
        match self.session.hovered() {
            Some(hovered) if hovered == bucket => {
                Some(if self.session.is_visible() { u8::MAX } else { 0 })
            }
            Some(_) => None,
            None => (self.session.sticky() == Some(bucket)).then_some(self.style.sticky_scale),
        }
    }
}

impl Default for SettingsMenu {
    fn default() -> Self {
        Self::new(
            SettingsConfig::default(),
            SelectionTimings::default(),
            MenuStyle::default(),
            Settings::default(),
        )
    }
}
