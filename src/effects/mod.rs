//! Pointer and scroll driven visual effects.
//!
//! Everything here is a pure function from an input signal to a style
//! record; the components in `crate::components` apply the records.

pub mod glow;
pub mod interpolate;
pub mod parallax;
pub mod reveal;
