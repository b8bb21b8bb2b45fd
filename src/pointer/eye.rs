//! Eye pointer
//!
//! Moves the iris around the eye rings in one of eight compass directions.
//! The iris shape for each direction is a hand-tuned cluster that spans
//! several rings, so it is stored as raw indices instead of being derived
//! from the ring tables.

use crate::angle::{AngleClassifier, COMPASS_DIRECTIONS, Classification};
use crate::color::{BLACK, Rgb, rgb_from_u32};
use crate::joystick::JoystickSample;
use crate::layout::SegmentId;
use crate::segment::SegmentMap;

// Clusters below are tuned for `DEFAULT_WIRING`.
const CLUSTER_CENTER: &[u16] = &[112, 113, 114, 115, 116, 117, 118, 119, 120];
const CLUSTER_N: &[u16] = &[60, 91, 92, 93, 100, 101, 111, 114];
const CLUSTER_NE: &[u16] = &[80, 81, 82, 93, 94, 95, 110, 111, 115];
const CLUSTER_E: &[u16] = &[78, 95, 96, 97, 108, 109, 110, 116];
const CLUSTER_SE: &[u16] = &[74, 75, 76, 97, 98, 99, 107, 108, 117];
const CLUSTER_S: &[u16] = &[72, 84, 85, 99, 105, 106, 107, 118];
const CLUSTER_SW: &[u16] = &[68, 69, 70, 85, 86, 87, 104, 105, 119];
const CLUSTER_W: &[u16] = &[66, 87, 88, 89, 102, 103, 104, 112];
const CLUSTER_NW: &[u16] = &[62, 63, 64, 89, 90, 91, 101, 102, 113];

/// Where the eye is looking
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EyeDirection {
    #[default]
    Center,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl EyeDirection {
    /// Compass directions in bucket order, clockwise from north
    pub const COMPASS: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Direction of an 8-bucket pointer classification
    pub fn from_classification(classification: &Classification) -> Self {
        classification
            .bucket()
            .and_then(|bucket| Self::COMPASS.get(usize::from(bucket)).copied())
            .unwrap_or(Self::Center)
    }

    /// Raw LED indices lit for this direction
    pub const fn cluster(self) -> &'static [u16] {
        match self {
            Self::Center => CLUSTER_CENTER,
            Self::N => CLUSTER_N,
            Self::NE => CLUSTER_NE,
            Self::E => CLUSTER_E,
            Self::SE => CLUSTER_SE,
            Self::S => CLUSTER_S,
            Self::SW => CLUSTER_SW,
            Self::W => CLUSTER_W,
            Self::NW => CLUSTER_NW,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyePointerConfig {
    pub iris: Rgb,
    /// Color of every eye LED outside the iris
    pub sclera: Rgb,
}

impl Default for EyePointerConfig {
    fn default() -> Self {
        Self {
            iris: rgb_from_u32(0x00B4FF),
            sclera: BLACK,
        }
    }
}

/// Eye pointer renderer
#[derive(Debug, Clone)]
pub struct EyePointer {
    config: EyePointerConfig,
    direction: EyeDirection,
}

impl EyePointer {
    pub const fn new(config: EyePointerConfig) -> Self {
        Self {
            config,
            direction: EyeDirection::Center,
        }
    }

    pub const fn direction(&self) -> EyeDirection {
        self.direction
    }

    /// Follow the joystick
    pub fn update(&mut self, classifier: &AngleClassifier, sample: &JoystickSample) {
        let classification = classifier.classify_pointer(sample, COMPASS_DIRECTIONS);
        self.direction = EyeDirection::from_classification(&classification);
    }

    /// Draw the eye into the buffer
    pub fn render(&self, map: &SegmentMap, leds: &mut [Rgb]) {
        for id in SegmentId::EYES {
            map.fill(leds, id, self.config.sclera);
        }
        for &raw in self.direction.cluster() {
            if let Some(led) = leds.get_mut(raw as usize) {
                *led = self.config.iris;
            }
        }
    }
}

impl Default for EyePointer {
    fn default() -> Self {
        Self::new(EyePointerConfig::default())
    }
}
