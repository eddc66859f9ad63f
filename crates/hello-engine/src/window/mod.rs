//! Window + runtime loop.
//!
//! Owns the `winit` event loop and drives the window session: GL context, GUI
//! and the application callbacks, one frame per redraw.

mod runtime;

pub use runtime::{EventLoopDriver, Platform, Runtime, RuntimeConfig, WinitPlatform};
