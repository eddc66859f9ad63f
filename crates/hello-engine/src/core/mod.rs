//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and the application: the app callbacks, their per-frame context, the close
//! state machine and release-once ownership of session resources.

mod app;
mod ctx;
mod lifecycle;
mod scoped;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, StartCtx};
pub use lifecycle::{LoopState, Phase};
pub use scoped::{Scoped, Shutdown};
