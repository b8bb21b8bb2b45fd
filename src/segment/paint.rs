//! Color writes expressed in logical ring terms

use super::SegmentMap;
use crate::color::{BLACK, Rgb, add_colors, blend_colors, scale_color};
use crate::error::Error;
use crate::layout::SegmentId;
use crate::math8::fraction8;

/// Scale applied to the flanking pixels of a pointer (2/3 intensity)
pub const TRAIL_SCALE: u8 = 170;

/// Logical offsets lit by a pointer of a given width
///
/// Offsets are relative to the pointer's center pixel. Pixels in
/// `full_first..=full_last` are drawn at full intensity, the rest at
/// [`TRAIL_SCALE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSpan {
    pub first: isize,
    pub last: isize,
    pub full_first: isize,
    pub full_last: isize,
}

impl PointerSpan {
    pub const fn is_full(&self, offset: isize) -> bool {
        offset >= self.full_first && offset <= self.full_last
    }
}

/// Compute the span of a pointer `width` pixels wide
///
/// `fraction` is how far past the center pixel the true center lies. Odd
/// widths get one full-intensity pixel; even widths get two, and the extra
/// pixel goes on the side of the true center.
#[allow(clippy::cast_possible_wrap)]
pub fn pointer_span(width: usize, fraction: f32) -> PointerSpan {
    let half = (width / 2) as isize;
    if width % 2 == 1 {
        return PointerSpan {
            first: -half,
            last: half,
            full_first: 0,
            full_last: 0,
        };
    }
    if fraction >= 0.5 {
        PointerSpan {
            first: 1 - half,
            last: half,
            full_first: 0,
            full_last: 1,
        }
    } else {
        PointerSpan {
            first: -half,
            last: half - 1,
            full_first: -1,
            full_last: 0,
        }
    }
}

#[inline]
fn set(leds: &mut [Rgb], raw: usize, color: Rgb) {
    if let Some(led) = leds.get_mut(raw) {
        *led = color;
    }
}

impl SegmentMap {
    /// Paint a pointer `width` LEDs wide centered on a ring position
    ///
    /// Offsets wrap around the segment and never bleed into neighbours.
    /// The width is clamped to the segment length.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn paint_at(
        &self,
        leds: &mut [Rgb],
        id: SegmentId,
        position: f32,
        color: Rgb,
        width: usize,
    ) -> Result<(), Error> {
        let segment = self.segment(id);
        let center = segment.logical_at(position)?;
        let count = segment.count();
        let width = width.min(count);
        if width == 0 {
            return Ok(());
        }

        let exact = position * count as f32;
        let span = pointer_span(width, exact - libm::floorf(exact));
        let dimmed = scale_color(color, TRAIL_SCALE);
        for offset in span.first..=span.last {
            let logical = (center as isize + offset).rem_euclid(count as isize) as usize;
            let raw = segment.raw_index(logical)?;
            set(leds, raw, if span.is_full(offset) { color } else { dimmed });
        }
        Ok(())
    }

    /// Paint the same pointer in several segments from one angle in degrees
    ///
    /// Segments that reject the position are skipped.
    pub fn paint_at_angle(
        &self,
        leds: &mut [Rgb],
        ids: &[SegmentId],
        angle: f32,
        color: Rgb,
        width: usize,
    ) {
        let position = crate::angle::normalize_degrees(angle) / 360.0;
        for &id in ids {
            let _ = self.paint_at(leds, id, position, color, width);
        }
    }

    /// Set one logical LED
    pub fn set_logical(
        &self,
        leds: &mut [Rgb],
        id: SegmentId,
        logical: usize,
        color: Rgb,
    ) -> Result<(), Error> {
        let raw = self.raw_index(id, logical)?;
        set(leds, raw, color);
        Ok(())
    }

    /// Add a color on top of one logical LED, saturating each channel
    pub fn add_at(
        &self,
        leds: &mut [Rgb],
        id: SegmentId,
        logical: usize,
        color: Rgb,
    ) -> Result<(), Error> {
        let raw = self.raw_index(id, logical)?;
        if let Some(led) = leds.get_mut(raw) {
            *led = add_colors(*led, color);
        }
        Ok(())
    }

    /// Turn off every LED of a segment
    pub fn clear(&self, leds: &mut [Rgb], id: SegmentId) {
        self.fill(leds, id, BLACK);
    }

    /// Turn off every LED of the chain
    pub fn clear_all(&self, leds: &mut [Rgb]) {
        for id in SegmentId::ALL {
            self.clear(leds, id);
        }
    }

    /// Fill a segment with one color
    pub fn fill(&self, leds: &mut [Rgb], id: SegmentId, color: Rgb) {
        let segment = self.segment(id);
        for raw in segment.start()..=segment.end() {
            set(leds, raw, color);
        }
    }

    /// Fill a segment with a linear gradient from 12 o'clock onwards
    ///
    /// Logical index 0 gets `from`, the last logical index gets `to`.
    pub fn fill_gradient(&self, leds: &mut [Rgb], id: SegmentId, from: Rgb, to: Rgb) {
        let segment = self.segment(id);
        let last = segment.count() - 1;
        for logical in 0..=last {
            if let Ok(raw) = segment.raw_index(logical) {
                set(leds, raw, blend_colors(from, to, fraction8(logical, last)));
            }
        }
    }

    /// Light the first `lit` logical LEDs of a segment and clear the rest
    pub fn fill_level(&self, leds: &mut [Rgb], id: SegmentId, lit: usize, color: Rgb) {
        let segment = self.segment(id);
        for logical in 0..segment.count() {
            if let Ok(raw) = segment.raw_index(logical) {
                set(leds, raw, if logical < lit { color } else { BLACK });
            }
        }
    }
}
