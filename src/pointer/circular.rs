//! Circular pointer
//!
//! An arc on the clock ring that follows the joystick angle and grows wider
//! the further the stick is pushed.

use crate::angle::{AngleClassifier, map_magnitude, pointer_angle};
use crate::color::{BLACK, Rgb, rgb_from_u32};
use crate::joystick::JoystickSample;
use crate::layout::SegmentId;
use crate::segment::SegmentMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircularPointerConfig {
    /// Ring the pointer is drawn on
    pub segment: SegmentId,
    pub foreground: Rgb,
    pub background: Rgb,
    /// Arc width right outside the deadzone
    pub min_width: usize,
    /// Arc width at full deflection
    pub max_width: usize,
}

impl Default for CircularPointerConfig {
    fn default() -> Self {
        Self {
            segment: SegmentId::Clock,
            foreground: rgb_from_u32(0xFF6A00),
            background: BLACK,
            min_width: 1,
            max_width: 9,
        }
    }
}

/// Circular pointer renderer
#[derive(Debug, Clone)]
pub struct CircularPointer {
    config: CircularPointerConfig,
}

impl CircularPointer {
    pub const fn new(config: CircularPointerConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &CircularPointerConfig {
        &self.config
    }

    /// Draw the pointer for one sample
    ///
    /// Inside the deadzone only the background is drawn.
    pub fn render(
        &self,
        map: &SegmentMap,
        leds: &mut [Rgb],
        classifier: &AngleClassifier,
        sample: &JoystickSample,
    ) {
        let config = &self.config;
        map.fill(leds, config.segment, config.background);

        let Some(deflection) = classifier.deflection(sample) else {
            return;
        };
        let width = map_magnitude(
            deflection.magnitude(),
            classifier.config(),
            config.min_width,
            config.max_width,
        );
        let position = pointer_angle(deflection) / 360.0;
        let _ = map.paint_at(leds, config.segment, position, config.foreground, width);
    }
}

impl Default for CircularPointer {
    fn default() -> Self {
        Self::new(CircularPointerConfig::default())
    }
}
