//! Design tokens for theming
//!
//! Tokens are the atomic values themes are composed from:
//! - Colors and CSS variable references
//! - Ramps (ordered shades of one hue)
//! - Palettes (ramps plus accent roles and flat colors)

mod color;
mod palette;
mod ramp;

pub use color::*;
pub use palette::*;
pub use ramp::*;
