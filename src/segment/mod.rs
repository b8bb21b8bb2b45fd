//! Segment addressing layer
//!
//! Maps logical ring positions (0 = 12 o'clock) onto raw indices of the
//! physical LED chain. All color writes outside this crate go through
//! [`SegmentMap`], so "up" means the same thing on every ring no matter how
//! the ring was soldered.

mod paint;

use heapless::Vec;

pub use paint::{PointerSpan, TRAIL_SCALE, pointer_span};

use crate::error::Error;
use crate::layout::{MAX_SEGMENT_LEDS, RingWiring, SegmentId};

/// Logical to raw lookup table of one segment
pub type LookupTable = Vec<u16, MAX_SEGMENT_LEDS>;

/// One ring (or the pole strip) of the chain
#[derive(Debug, Clone)]
pub struct Segment {
    id: SegmentId,
    /// First raw index
    start: u16,
    /// Last raw index, inclusive
    end: u16,
    /// Absent for single-LED segments
    table: Option<LookupTable>,
}

impl Segment {
    #[allow(clippy::cast_possible_truncation)]
    fn from_wiring(wiring: &RingWiring, start: u16) -> Self {
        debug_assert!(wiring.count > 0, "segment {} is empty", wiring.id.as_str());

        let count = wiring.led_count();
        let table = if count > 1 {
            let mut table = LookupTable::new();
            for logical in 0..count {
                if table.push(start + wiring.offset_of(logical)).is_err() {
                    break;
                }
            }
            Some(table)
        } else {
            None
        };
        let len = table.as_ref().map_or(count, |table| table.len() as u16);

        Self {
            id: wiring.id,
            start,
            end: start + len.saturating_sub(1),
            table,
        }
    }

    pub const fn id(&self) -> SegmentId {
        self.id
    }

    pub const fn name(&self) -> &'static str {
        self.id.as_str()
    }

    /// First raw index of the segment
    pub const fn start(&self) -> usize {
        self.start as usize
    }

    /// Last raw index of the segment, inclusive
    pub const fn end(&self) -> usize {
        self.end as usize
    }

    /// Number of LEDs in the segment
    pub const fn count(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// Check if a raw index belongs to this segment
    pub const fn contains(&self, raw: usize) -> bool {
        raw >= self.start() && raw <= self.end()
    }

    /// Raw index of a logical position
    pub fn raw_index(&self, logical: usize) -> Result<usize, Error> {
        let count = self.count();
        if logical >= count {
            return Err(Error::LogicalIndexOutOfRange {
                index: logical,
                count,
            });
        }
        match &self.table {
            Some(table) => table
                .get(logical)
                .map(|&raw| raw as usize)
                .ok_or(Error::LogicalIndexOutOfRange {
                    index: logical,
                    count,
                }),
            None => Ok(self.start()),
        }
    }

    /// Logical index under a fractional ring position
    ///
    /// `0.0` is 12 o'clock, `1.0` wraps back to it.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn logical_at(&self, position: f32) -> Result<usize, Error> {
        if !(0.0..=1.0).contains(&position) {
            return Err(Error::PositionOutOfRange(position));
        }
        let count = self.count();
        let logical = libm::floorf(position * count as f32) as usize;
        Ok(if logical >= count { 0 } else { logical })
    }

    /// Fractional ring position of a logical index
    #[allow(clippy::cast_precision_loss)]
    pub fn position_of(&self, logical: usize) -> Result<f32, Error> {
        let count = self.count();
        if logical >= count {
            return Err(Error::LogicalIndexOutOfRange {
                index: logical,
                count,
            });
        }
        Ok(logical as f32 / count as f32)
    }
}

/// All segments of the sculpture, keyed by [`SegmentId`]
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct SegmentMap {
    segments: [Segment; SegmentId::COUNT],
    led_count: usize,
}

impl SegmentMap {
    /// Build the map from a wiring table listed in chain order
    pub fn new(wiring: &[RingWiring; SegmentId::COUNT]) -> Self {
        let mut starts = [0u16; SegmentId::COUNT];
        let mut seen = [false; SegmentId::COUNT];
        let mut next = 0u16;
        for ring in wiring {
            let key = ring.id.index();
            debug_assert!(!seen[key], "segment {} wired twice", ring.id.as_str());
            seen[key] = true;
            starts[key] = next;
            next += ring.led_count();
        }

        let segments = core::array::from_fn(|key| {
            let ring = wiring
                .iter()
                .find(|ring| ring.id.index() == key)
                .unwrap_or(&wiring[key]);
            Segment::from_wiring(ring, starts[key])
        });

        Self {
            segments,
            led_count: next as usize,
        }
    }

    /// Total number of LEDs in the chain
    pub const fn led_count(&self) -> usize {
        self.led_count
    }

    pub const fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments[id.index()]
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Find the segment that owns a raw index
    pub fn segment_for(&self, raw: usize) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.contains(raw))
    }

    /// Raw index of a logical position within a segment
    pub fn raw_index(&self, id: SegmentId, logical: usize) -> Result<usize, Error> {
        self.segment(id).raw_index(logical)
    }

    /// Raw index under a fractional ring position (0.0 = 12 o'clock)
    pub fn raw_index_at(&self, id: SegmentId, position: f32) -> Result<usize, Error> {
        let segment = self.segment(id);
        segment.raw_index(segment.logical_at(position)?)
    }

    /// Fractional ring position of a logical index
    pub fn position_of(&self, id: SegmentId, logical: usize) -> Result<f32, Error> {
        self.segment(id).position_of(logical)
    }
}

impl Default for SegmentMap {
    fn default() -> Self {
        Self::new(&crate::layout::DEFAULT_WIRING)
    }
}
