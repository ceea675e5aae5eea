//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, buffers platform events, and runs
//! one frame (poll, update, render, present) per redraw.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
