#![no_std]

pub mod angle;
pub mod button;
pub mod color;
pub mod controller;
pub mod error;
pub mod frame_scheduler;
pub mod joystick;
pub mod layout;
pub mod math8;
pub mod pointer;
pub mod registry;
pub mod segment;
pub mod selection;

pub use angle::{AngleClassifier, Classification, Deflection};
pub use button::{ButtonGesture, ButtonTimings, ButtonTracker};
pub use controller::{Controller, ControllerConfig, DisplayMode, MainDisplay};
pub use error::Error;
pub use frame_scheduler::FrameScheduler;
pub use joystick::{JoystickConfig, JoystickSample, JoystickSource};
pub use layout::{DEFAULT_LED_COUNT, DEFAULT_WIRING, RingWiring, SegmentId, Winding};
pub use pointer::{CircularPointer, CircularPointerConfig, EyeDirection, EyePointer, EyePointerConfig};
pub use registry::{NamedRegistry, PatternRegistry};
pub use segment::{Segment, SegmentMap};
pub use selection::{
    Category, MenuStyle, Phase, SelectionSession, SelectionTimings, Settings, SettingsConfig,
    SettingsMenu,
};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
