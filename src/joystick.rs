//! Joystick samples and their calibration

/// One reading of the joystick, as delivered by the ADC
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JoystickSample {
    pub x: i32,
    pub y: i32,
    /// Push button level (true = pressed)
    pub pressed: bool,
}

impl JoystickSample {
    pub const fn new(x: i32, y: i32, pressed: bool) -> Self {
        Self { x, y, pressed }
    }
}

/// Calibration of the analog axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JoystickConfig {
    /// Raw reading of a centered axis
    pub center: i32,
    /// Deflections closer to the center than this are ignored
    pub deadzone: f32,
    /// Deflection treated as full travel
    pub max_deflection: f32,
    /// Set when the ADC reports larger values for "down"
    pub invert_y: bool,
}

impl JoystickConfig {
    /// 12-bit ADC centered at mid-scale
    pub const DEFAULT: Self = Self {
        center: 2048,
        deadzone: 300.0,
        max_deflection: 2048.0,
        invert_y: false,
    };
}

impl Default for JoystickConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Source of joystick samples
///
/// Implement this trait for the board's ADC and button pin.
pub trait JoystickSource {
    /// Read the current joystick state
    fn sample(&mut self) -> JoystickSample;
}
