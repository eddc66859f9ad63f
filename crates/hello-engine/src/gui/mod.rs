//! Immediate-mode GUI layer (egui on top of the GL context).
//!
//! - `config`: flags and font settings
//! - `dpi`: monitor scale policy
//! - `fonts`: font file loading and text style sizing
//! - `layer`: context + winit/GL backends for one window
//! - `debug`: the per-frame debug window

mod config;
mod debug;
pub mod dpi;
mod fonts;
mod layer;

pub use config::{FontConfig, GuiConfig, GuiFlags, BASE_FONT_SIZE};
pub use debug::{debug_window, DebugStats, DEBUG_WINDOW_TITLE};
pub use fonts::{font_definitions, load_font, text_styles, FontError};
pub use layer::{apply_scale, zoom_for, GuiLayer};
