//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the window runtime and
//! the game built on top of it: the [`App`] hook trait, the per-frame update
//! context, and the frame-loop driver that owns run state and phase ordering.

mod app;
mod ctx;
mod driver;

pub use app::App;
pub use ctx::UpdateCtx;
pub use driver::{FrameDriver, RunState};
