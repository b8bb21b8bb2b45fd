//! Desktop preview app for eyeclock-composer
//!
//! Draws the clock ring, the eye rings and the pole in a window. Dragging
//! inside the joystick pad moves a virtual stick; holding the button (or
//! space) presses it.

use std::f32::consts::TAU;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use eyeclock_composer::color::{BLACK, rgb_from_u32, scale_color};
use eyeclock_composer::{
    Controller, ControllerConfig, DEFAULT_LED_COUNT, FrameScheduler, Instant, JoystickConfig,
    JoystickSample, JoystickSource, MainDisplay, NamedRegistry, OutputDriver, PatternRegistry,
    Rgb, SegmentId, SegmentMap, Settings,
};

/// Size of each LED dot in pixels
const LED_SIZE: f32 = 5.0;

/// Radius of the joystick pad in pixels
const PAD_RADIUS: f32 = 80.0;

const PATTERN_NAMES: &[&str] = &["comet", "solid", "gradient"];
const PALETTE_NAMES: &[&str] = &["ember", "ocean", "forest", "candy"];
const PALETTE_COLORS: [u32; 4] = [0xFF4000, 0x0060FF, 0x20C040, 0xFF40A0];

/// Ring radii in pixels, keyed like `SegmentId::ALL` minus the pole
const RING_RADII: [(SegmentId, f32); 6] = [
    (SegmentId::Clock, 200.0),
    (SegmentId::Eye0, 110.0),
    (SegmentId::Eye1, 82.0),
    (SegmentId::Eye2, 58.0),
    (SegmentId::Eye3, 34.0),
    (SegmentId::Eye4, 0.0),
];

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_title("Eyeclock Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "eyeclock-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

/// Virtual stick driven by the mouse
struct PreviewJoystick {
    sample: JoystickSample,
}

impl JoystickSource for PreviewJoystick {
    fn sample(&mut self) -> JoystickSample {
        self.sample
    }
}

/// Keeps the last written frame for drawing
#[derive(Default)]
struct FrameCapture {
    frame: Vec<Rgb>,
}

impl OutputDriver for FrameCapture {
    fn write(&mut self, colors: &[Rgb]) {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
    }
}

/// Stand-in for the pattern library
struct DemoDisplay {
    patterns: NamedRegistry<'static>,
    palettes: NamedRegistry<'static>,
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

    #[allow(clippy::cast_precision_loss)]
    fn render(&mut self, now: Instant, settings: &Settings, map: &SegmentMap, leds: &mut [Rgb]) {
        let base = PALETTE_COLORS
            .get(settings.palette())
            .copied()
            .map_or(BLACK, rgb_from_u32);
        let color = scale_color(base, settings.brightness());
        map.clear_all(leds);

        match self.patterns.name_at(settings.pattern()) {
            Some("comet") => {
                let period_ms = 6000 / u64::from(settings.speed().max(1));
                let position = (now.as_millis() % period_ms) as f32 / period_ms as f32;
                let _ = map.paint_at(leds, SegmentId::Clock, position, color, 7);
                map.paint_at_angle(
                    leds,
                    &[SegmentId::Eye0, SegmentId::Eye1, SegmentId::Eye2],
                    position * 360.0,
                    color,
                    3,
                );
            }
            Some("solid") => {
                for id in SegmentId::ALL {
                    map.fill(leds, id, color);
                }
            }
            _ => {
                for id in SegmentId::ALL {
                    map.fill_gradient(leds, id, color, BLACK);
                }
            }
        }
    }
}

type Scheduler = FrameScheduler<DemoDisplay, PreviewJoystick, FrameCapture, DEFAULT_LED_COUNT>;

struct PreviewApp {
    scheduler: Scheduler,
    joystick: JoystickConfig,
    /// Wall-clock reference for the synthetic time
    started: StdInstant,
}

impl PreviewApp {
    fn new() -> Self {
        let config = ControllerConfig::default();
        let display = DemoDisplay {
            patterns: NamedRegistry::new(PATTERN_NAMES),
            palettes: NamedRegistry::new(PALETTE_NAMES),
        };
        let controller = Controller::new(SegmentMap::default(), display, &config);
        let joystick = PreviewJoystick {
            sample: JoystickSample::new(config.joystick.center, config.joystick.center, false),
        };

        Self {
            scheduler: FrameScheduler::new(controller, joystick, FrameCapture::default()),
            joystick: config.joystick,
            started: StdInstant::now(),
        }
    }

    fn now(&self) -> Instant {
        #[allow(clippy::cast_possible_truncation)]
        Instant::from_millis(self.started.elapsed().as_millis() as u64)
    }

    /// Joystick pad: dragging sets the deflection, releasing recenters
    #[allow(clippy::cast_possible_truncation)]
    fn joystick_pad(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(PAD_RADIUS * 2.0, PAD_RADIUS * 2.0), egui::Sense::drag());
        let center = response.rect.center();
        let scale = self.joystick.max_deflection / PAD_RADIUS;

        let offset = match response.interact_pointer_pos() {
            Some(pos) if response.dragged() => {
                let offset = pos - center;
                let length = offset.length();
                if length > PAD_RADIUS {
                    offset * (PAD_RADIUS / length)
                } else {
                    offset
                }
            }
            _ => egui::Vec2::ZERO,
        };

        let sample = &mut self.scheduler.joystick_mut().sample;
        sample.x = self.joystick.center + (offset.x * scale) as i32;
        // Screen y grows downwards
        sample.y = self.joystick.center - (offset.y * scale) as i32;

        painter.circle_stroke(center, PAD_RADIUS, egui::Stroke::new(1.0, egui::Color32::GRAY));
        painter.circle_stroke(
            center,
            self.joystick.deadzone / scale,
            egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
        );
        painter.circle_filled(center + offset, 8.0, egui::Color32::LIGHT_GRAY);
    }

    fn draw_sculpture(&self, ui: &mut egui::Ui) {
        let frame = &self.scheduler.output().frame;
        let map = self.scheduler.controller().map();
        let size = ui.available_size();
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let center = response.rect.center() - egui::vec2(40.0, 0.0);
        let pixel = |raw: usize| {
            frame
                .get(raw)
                .map_or(egui::Color32::BLACK, |led| egui::Color32::from_rgb(led.r, led.g, led.b))
        };

        painter.rect_filled(response.rect, 0.0, egui::Color32::from_gray(16));

        #[allow(clippy::cast_precision_loss)]
        for (id, radius) in RING_RADII {
            let segment = map.segment(id);
            for logical in 0..segment.count() {
                let Ok(raw) = segment.raw_index(logical) else {
                    continue;
                };
                // Logical 0 at the top, clockwise
                let angle = logical as f32 / segment.count() as f32 * TAU;
                let pos = center + radius * egui::vec2(angle.sin(), -angle.cos());
                painter.circle_filled(pos, LED_SIZE, pixel(raw));
            }
        }

        let pole = map.segment(SegmentId::Pole);
        let pole_x = center.x + 260.0;
        let pitch = LED_SIZE * 2.0 + 2.0;
        #[allow(clippy::cast_precision_loss)]
        for logical in 0..pole.count() {
            let Ok(raw) = pole.raw_index(logical) else {
                continue;
            };
            // Logical 0 at the bottom
            let offset = (logical as f32 - pole.count() as f32 / 2.0) * pitch;
            painter.circle_filled(egui::pos2(pole_x, center.y - offset), LED_SIZE, pixel(raw));
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Joystick");
            self.joystick_pad(ui);

            ui.add_space(8.0);
            let button = ui.add(egui::Button::new("Press (space)"));
            let pressed = button.is_pointer_button_down_on()
                || ctx.input(|input| input.key_down(egui::Key::Space));
            self.scheduler.joystick_mut().sample.pressed = pressed;

            ui.add_space(16.0);
            let controller = self.scheduler.controller();
            let settings = controller.settings();
            let (patterns, palettes) = controller.display().registries();
            ui.label(format!("Mode: {}", controller.mode().as_str()));
            ui.label(format!("Brightness: {}", settings.brightness()));
            ui.label(format!("Speed: {}", settings.speed()));
            ui.label(format!(
                "Pattern: {}",
                patterns.name_at(settings.pattern()).unwrap_or("-")
            ));
            ui.label(format!(
                "Palette: {}",
                palettes.name_at(settings.palette()).unwrap_or("-")
            ));

            ui.add_space(8.0);
            ui.label("Click: next pattern / back");
            ui.label("Double click: pointer modes");
            ui.label("Long press: settings");
        });

        let now = self.now();
        self.scheduler.tick(now);

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_sculpture(ui);
        });
    }
}
