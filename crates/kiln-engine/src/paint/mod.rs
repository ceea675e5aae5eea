//! Color values used by the render path.

mod color;

pub use color::Color;
