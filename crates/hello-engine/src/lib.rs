//! Hello engine crate.
//!
//! This crate owns the platform, OpenGL and GUI runtime pieces behind the
//! triangle demo: window + context bootstrap, the render loop, GL resources
//! for the triangle and the egui debug overlay.

pub mod core;
pub mod device;
pub mod gui;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
