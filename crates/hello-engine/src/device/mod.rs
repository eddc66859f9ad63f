//! Window + OpenGL context management.
//!
//! This module is responsible for:
//! - creating the window together with a matching GL config
//! - creating the core-profile context and window surface, and making it current
//! - loading GL entry points and exposing them as a shared `glow::Context`
//! - surface resize and buffer swap

mod context;
mod error;
mod init;

pub use context::GlWindow;
pub use error::DeviceError;
pub use init::GlInit;
