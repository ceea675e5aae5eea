//! Platform event translation.
//!
//! Keeps winit types out of the public input API; the window runtime is the
//! only caller.

pub mod winit;
