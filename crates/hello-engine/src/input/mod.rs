//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform key events into `KeyInput`s.

mod types;

pub use types::{Key, KeyInput, KeyState};
