use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::angle::AngleClassifier;
use crate::button::{ButtonGesture, ButtonTimings, ButtonTracker};
use crate::color::Rgb;
use crate::joystick::{JoystickConfig, JoystickSample};
use crate::pointer::{CircularPointer, CircularPointerConfig, EyePointer, EyePointerConfig};
use crate::registry::PatternRegistry;
use crate::segment::SegmentMap;
use crate::selection::{
    MenuEvent, MenuStyle, SelectionTimings, Settings, SettingsConfig, SettingsMenu,
};

/// Renders the normal pattern display
///
/// Implemented outside this crate by whatever owns the pattern library.
pub trait MainDisplay {
    type Patterns: PatternRegistry;
    type Palettes: PatternRegistry;

    fn registries(&self) -> (&Self::Patterns, &Self::Palettes);

    fn registries_mut(&mut self) -> (&mut Self::Patterns, &mut Self::Palettes);

    /// Draw one frame of the active pattern with the committed settings
    fn render(&mut self, now: Instant, settings: &Settings, map: &SegmentMap, leds: &mut [Rgb]);
}

/// Top-level mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Main,
    Settings,
    EyePointer,
    CircularPointer,
}

impl DisplayMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Settings => "settings",
            Self::EyePointer => "eye",
            Self::CircularPointer => "circular",
        }
    }

    /// Mode a gesture leads to, `None` when the gesture does nothing here
    ///
    /// A click in main mode stays in main mode; cycling the pattern is
    /// handled by the controller.
    pub const fn after(self, gesture: ButtonGesture) -> Option<Self> {
        match (self, gesture) {
            (Self::Main, ButtonGesture::Click) => None,
            (Self::Settings | Self::EyePointer | Self::CircularPointer, ButtonGesture::Click) => {
                Some(Self::Main)
            }
            (Self::Main | Self::CircularPointer, ButtonGesture::DoubleClick) => {
                Some(Self::EyePointer)
            }
            (Self::EyePointer, ButtonGesture::DoubleClick) => Some(Self::CircularPointer),
            (Self::Settings, ButtonGesture::DoubleClick | ButtonGesture::LongPress) => None,
            (_, ButtonGesture::LongPress) => Some(Self::Settings),
        }
    }
}

/// Configuration of the controller and everything it drives
#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerConfig {
    pub joystick: JoystickConfig,
    pub button: ButtonTimings,
    pub selection: SelectionTimings,
    pub settings: SettingsConfig,
    pub menu: MenuStyle,
    pub eye: EyePointerConfig,
    pub circular: CircularPointerConfig,
    /// Values in effect before anything is committed
    pub initial: Settings,
}

/// Mode dispatcher
///
/// Routes button gestures and joystick samples into the renderer of the
/// current mode.
pub struct Controller<D: MainDisplay> {
    map: SegmentMap,
    display: D,
    mode: DisplayMode,

    classifier: AngleClassifier,
    button: ButtonTracker,
    menu: SettingsMenu,
    eye: EyePointer,
    circular: CircularPointer,
}

impl<D: MainDisplay> Controller<D> {
    pub fn new(map: SegmentMap, display: D, config: &ControllerConfig) -> Self {
        Self {
            map,
            display,
            mode: DisplayMode::Main,
            classifier: AngleClassifier::new(config.joystick),
            button: ButtonTracker::new(config.button),
            menu: SettingsMenu::new(config.settings, config.selection, config.menu, config.initial),
            eye: EyePointer::new(config.eye),
            circular: CircularPointer::new(config.circular),
        }
    }

    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub const fn settings(&self) -> &Settings {
        self.menu.settings()
    }

    pub const fn map(&self) -> &SegmentMap {
        &self.map
    }

    pub const fn menu(&self) -> &SettingsMenu {
        &self.menu
    }

    pub const fn eye(&self) -> &EyePointer {
        &self.eye
    }

    pub const fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Process one sample and draw the resulting mode into `leds`
    pub fn tick(&mut self, now: Instant, sample: &JoystickSample, leds: &mut [Rgb]) -> DisplayMode {
        if let Some(gesture) = self.button.update(sample.pressed, now) {
            self.handle_gesture(gesture);
        }

        match self.mode {
            DisplayMode::Main => {}
            DisplayMode::Settings => {
                let (patterns, palettes) = self.display.registries_mut();
                let event = self
                    .menu
                    .tick(now, &self.classifier, sample, patterns, palettes);
                if let MenuEvent::Committed(_) = event {
                    self.set_mode(DisplayMode::Main);
                }
            }
            DisplayMode::EyePointer => self.eye.update(&self.classifier, sample),
            DisplayMode::CircularPointer => {}
        }

        self.render(now, sample, leds);
        self.mode
    }

    /// Switch mode directly
    ///
    /// The settings session is reset whenever settings mode is entered or
    /// left.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        if mode == self.mode {
            return;
        }
        if mode == DisplayMode::Settings || self.mode == DisplayMode::Settings {
            self.menu.reset();
        }
        #[cfg(feature = "esp32-log")]
        println!("[controller] mode {} -> {}", self.mode.as_str(), mode.as_str());
        self.mode = mode;
    }

    fn handle_gesture(&mut self, gesture: ButtonGesture) {
        if let Some(mode) = self.mode.after(gesture) {
            self.set_mode(mode);
        } else if self.mode == DisplayMode::Main && gesture == ButtonGesture::Click {
            self.next_pattern();
        }
    }

    fn next_pattern(&mut self) {
        let (patterns, _) = self.display.registries_mut();
        let count = patterns.count();
        if count == 0 {
            return;
        }
        let next = (self.menu.settings().pattern() + 1) % count;
        if patterns.set_active(next).is_ok() {
            self.menu.settings_mut().set_pattern(next);
            #[cfg(feature = "esp32-log")]
            println!("[controller] pattern {}", next);
        }
    }

    fn render(&mut self, now: Instant, sample: &JoystickSample, leds: &mut [Rgb]) {
        if self.mode == DisplayMode::Main {
            self.display
                .render(now, self.menu.settings(), &self.map, leds);
            return;
        }

        self.map.clear_all(leds);
        match self.mode {
            DisplayMode::Settings => {
                let (patterns, palettes) = self.display.registries();
                self.menu.render(&self.map, leds, patterns, palettes);
            }
            DisplayMode::EyePointer => self.eye.render(&self.map, leds),
            DisplayMode::CircularPointer => {
                self.circular
                    .render(&self.map, leds, &self.classifier, sample);
            }
            DisplayMode::Main => {}
        }
    }
}
