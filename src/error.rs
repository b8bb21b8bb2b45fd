//! Error type shared by the addressing layer and the registries.
//!
//! Every variant is a lookup that landed outside its valid range. Callers
//! check the result before writing, so a failed lookup never touches the
//! LED buffer.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Logical index past the end of a segment
    #[error("logical index {index} is outside a segment of {count} LEDs")]
    LogicalIndexOutOfRange { index: usize, count: usize },

    /// Fractional ring position outside `0.0..=1.0` (or NaN)
    #[error("ring position {0} is outside 0.0..=1.0")]
    PositionOutOfRange(f32),

    /// Pattern or palette index past the end of a registry
    #[error("registry index {index} is outside {count} entries")]
    RegistryIndexOutOfRange { index: usize, count: usize },
}
