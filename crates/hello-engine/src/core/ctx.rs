use std::sync::Arc;

use crate::render::RenderCtx;
use crate::time::FrameTime;

/// Context passed to `core::App::on_start`.
pub struct StartCtx<'a> {
    /// Shared GL entry points; clone the `Arc` to keep them in a renderer.
    pub gl: &'a Arc<glow::Context>,
}

/// Per-frame context passed to `core::App::on_gui` and `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub render: RenderCtx<'a>,
    pub time: FrameTime,

    /// Framebuffer width / height, `None` while the framebuffer has no area.
    pub aspect: Option<f32>,

    pub dpi_scale: f32,
}
