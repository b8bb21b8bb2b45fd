//! Joystick pointer modes
//!
//! Both renderers take one joystick sample per tick and redraw their part of
//! the buffer from scratch; they keep no timing state.

mod circular;
mod eye;

pub use circular::{CircularPointer, CircularPointerConfig};
pub use eye::{EyeDirection, EyePointer, EyePointerConfig};
