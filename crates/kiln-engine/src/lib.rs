//! Kiln engine crate.
//!
//! A small windowed application shell: window + GPU surface, a fixed frame
//! loop (poll input, update, render, present), and the [`core::App`] hooks a
//! game implements on top of it.

pub mod core;
pub mod device;
pub mod input;
pub mod render;
pub mod time;
pub mod window;

pub mod logging;
pub mod paint;
