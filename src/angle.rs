//! Angle classifier
//!
//! Turns a joystick sample into a deflection, an angle measured from "up"
//! and a bucket index. Everything here is a pure function of its inputs.
//!
//! Two rotation conventions are in use and must not be merged:
//! - [`pointer_angle`] rotates a y-flipped `atan2` by +90°, which runs
//!   clockwise from up. The pointer modes use it.
//! - [`clock_angle`] rotates a plain `atan2` by −90°, which runs
//!   counter-clockwise from up. Clock-position selection uses it.

use core::f32::consts::PI;

use crate::joystick::{JoystickConfig, JoystickSample};

/// Number of clock positions in value selection
pub const CLOCK_POSITIONS: u8 = 12;

/// Number of compass directions around the eye
pub const COMPASS_DIRECTIONS: u8 = 8;

/// Number of menu quadrants
pub const QUADRANTS: u8 = 4;

/// Center-relative joystick deflection
///
/// `dx` grows to the right, `dy` grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Deflection {
    pub dx: f32,
    pub dy: f32,
}

impl Deflection {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }

    /// Subtract the calibrated center from a raw sample
    #[allow(clippy::cast_precision_loss)]
    pub fn from_sample(sample: &JoystickSample, config: &JoystickConfig) -> Self {
        let dx = (sample.x - config.center) as f32;
        let dy = (sample.y - config.center) as f32;
        Self {
            dx,
            dy: if config.invert_y { -dy } else { dy },
        }
    }

    /// Euclidean distance from the center
    pub fn magnitude(self) -> f32 {
        libm::sqrtf(self.dx * self.dx + self.dy * self.dy)
    }

    /// True when the deflection is strictly closer than `threshold`
    pub fn in_deadzone(self, threshold: f32) -> bool {
        self.magnitude() < threshold
    }
}

/// Wrap an angle in degrees into `0.0..360.0`
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = libm::fmodf(angle, 360.0);
    let wrapped = if wrapped < 0.0 { wrapped + 360.0 } else { wrapped };
    // -0.00001 + 360.0 rounds to 360.0 in f32
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

fn degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Angle used by the pointer modes: clockwise from up
pub fn pointer_angle(deflection: Deflection) -> f32 {
    normalize_degrees(degrees(libm::atan2f(-deflection.dy, deflection.dx)) + 90.0)
}

/// Angle used by clock-position selection: counter-clockwise from up
///
/// Stays counter-clockwise even though the settings menu paints its buckets
/// clockwise around the ring.
pub fn clock_angle(deflection: Deflection) -> f32 {
    normalize_degrees(degrees(libm::atan2f(deflection.dy, deflection.dx)) - 90.0)
}

/// Split the circle into `buckets` equal sectors and find the one holding `angle`
///
/// Bucket 0 is centered on 0°. Each sector spans from the midpoint before
/// its center (inclusive) to the midpoint after it (exclusive).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn bucket_for_angle(angle: f32, buckets: u8) -> u8 {
    if buckets <= 1 {
        return 0;
    }
    let width = 360.0 / f32::from(buckets);
    let shifted = normalize_degrees(angle) + width / 2.0;
    let bucket = libm::floorf(shifted / width) as u32;
    (bucket % buckets as u32) as u8
}

/// Quadrant of a deflection, numbered clockwise from the upper right
///
/// Points on an axis are resolved by this fixed table:
///
/// | dx    | dy    | quadrant        |
/// |-------|-------|-----------------|
/// | ≥ 0   | ≥ 0   | 0 (upper right) |
/// | ≥ 0   | < 0   | 1 (lower right) |
/// | < 0   | < 0   | 2 (lower left)  |
/// | < 0   | ≥ 0   | 3 (upper left)  |
pub fn quadrant(deflection: Deflection) -> u8 {
    let right = deflection.dx >= 0.0;
    let up = deflection.dy >= 0.0;
    match (right, up) {
        (true, true) => 0,
        (true, false) => 1,
        (false, false) => 2,
        (false, true) => 3,
    }
}

/// Map a magnitude onto `min..=max`
///
/// The deadzone is subtracted first so the output starts at `min` right
/// where the deadzone ends and reaches `max` at full travel.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn map_magnitude(magnitude: f32, config: &JoystickConfig, min: usize, max: usize) -> usize {
    if max <= min {
        return min;
    }
    let range = config.max_deflection - config.deadzone;
    if range <= 0.0 {
        return max;
    }
    let t = ((magnitude - config.deadzone) / range).clamp(0.0, 1.0);
    min + libm::roundf(t * (max - min) as f32) as usize
}

/// Result of classifying one sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Classification {
    Deadzone,
    Direction {
        /// Degrees from up, in the convention of the classifier used
        angle: f32,
        magnitude: f32,
        bucket: u8,
    },
}

impl Classification {
    pub const fn bucket(&self) -> Option<u8> {
        match self {
            Self::Deadzone => None,
            Self::Direction { bucket, .. } => Some(*bucket),
        }
    }

    pub const fn is_deadzone(&self) -> bool {
        matches!(self, Self::Deadzone)
    }
}

/// Classifier bound to one joystick calibration
#[derive(Debug, Clone, Copy)]
pub struct AngleClassifier {
    config: JoystickConfig,
}

impl AngleClassifier {
    pub const fn new(config: JoystickConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &JoystickConfig {
        &self.config
    }

    /// Deflection of a sample, or `None` inside the deadzone
    pub fn deflection(&self, sample: &JoystickSample) -> Option<Deflection> {
        let deflection = Deflection::from_sample(sample, &self.config);
        if deflection.in_deadzone(self.config.deadzone) {
            None
        } else {
            Some(deflection)
        }
    }

    /// Classify with the pointer convention (clockwise from up)
    pub fn classify_pointer(&self, sample: &JoystickSample, buckets: u8) -> Classification {
        self.classify(sample, buckets, pointer_angle)
    }

    /// Classify with the clock-position convention (counter-clockwise from up)
    pub fn classify_clock(&self, sample: &JoystickSample, buckets: u8) -> Classification {
        self.classify(sample, buckets, clock_angle)
    }

    /// Classify into the four menu quadrants
    pub fn classify_quadrant(&self, sample: &JoystickSample) -> Classification {
        let Some(deflection) = self.deflection(sample) else {
            return Classification::Deadzone;
        };
        Classification::Direction {
            angle: pointer_angle(deflection),
            magnitude: deflection.magnitude(),
            bucket: quadrant(deflection),
        }
    }

    fn classify(
        &self,
        sample: &JoystickSample,
        buckets: u8,
        angle_of: fn(Deflection) -> f32,
    ) -> Classification {
        let Some(deflection) = self.deflection(sample) else {
            return Classification::Deadzone;
        };
        let angle = angle_of(deflection);
        Classification::Direction {
            angle,
            magnitude: deflection.magnitude(),
            bucket: bucket_for_angle(angle, buckets),
        }
    }
}

impl Default for AngleClassifier {
    fn default() -> Self {
        Self::new(JoystickConfig::DEFAULT)
    }
}
