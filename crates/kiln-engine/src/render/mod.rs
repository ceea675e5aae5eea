//! Per-frame render surface handed to the render hook.

mod frame;

pub use frame::RenderFrame;
