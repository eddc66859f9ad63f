use std::sync::Arc;

use egui_glow::{EguiGlow, EventResponse};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use super::config::{GuiConfig, GuiFlags};
use super::fonts::{font_definitions, load_font, text_styles, FontError};
use crate::core::Shutdown;

/// The process's single GUI context with its platform and GL backends.
///
/// Owned by the window session; GL resources of the painter are released by
/// [`Shutdown::shutdown`] while the context is still current.
pub struct GuiLayer {
    egui: EguiGlow,
    dpi_scale: f32,
}

impl GuiLayer {
    /// Creates the context, attaches it to `window` and applies fonts and scale.
    ///
    /// The font file (if configured) is read before any GL object is created.
    pub fn new(
        event_loop: &ActiveEventLoop,
        gl: Arc<glow::Context>,
        window: &Window,
        config: &GuiConfig,
        dpi_scale: f32,
    ) -> Result<Self, FontError> {
        let custom = config.font.path.as_deref().map(load_font).transpose()?;
        record_flags(&config.flags);

        let native_ppp = window.scale_factor() as f32;
        let egui = EguiGlow::new(event_loop, gl, None, Some(native_ppp), true);

        let ctx = &egui.egui_ctx;
        ctx.set_fonts(font_definitions(custom));
        let base = config.font.base_size;
        ctx.all_styles_mut(|style| style.text_styles = text_styles(base));
        apply_scale(ctx, dpi_scale, native_ppp);

        log::info!(
            "gui ready (scale {dpi_scale}, font {:.1}px)",
            base * dpi_scale
        );

        Ok(Self { egui, dpi_scale })
    }

    /// Re-applies the UI scale after the window's native scale changed
    /// (e.g. it moved to another monitor).
    pub fn rescale(&self, native_ppp: f32) {
        apply_scale(&self.egui.egui_ctx, self.dpi_scale, native_ppp);
        log::debug!("gui rescaled for native scale {native_ppp}");
    }

    /// Forwards a window event to the platform backend.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> EventResponse {
        self.egui.on_window_event(window, event)
    }

    /// Runs one GUI frame. Paint it later with [`GuiLayer::paint`].
    pub fn run(&mut self, window: &Window, build: impl FnMut(&egui::Context)) {
        self.egui.run(window, build);
    }

    /// Paints the last frame over whatever is in the framebuffer.
    pub fn paint(&mut self, window: &Window) {
        self.egui.paint(window);
    }
}

impl Shutdown for GuiLayer {
    fn shutdown(&mut self) {
        self.egui.destroy();
        log::debug!("gui released");
    }
}

/// Zoom that brings the window's native pixels-per-point to `ui_scale`.
pub fn zoom_for(ui_scale: f32, native_ppp: f32) -> f32 {
    if native_ppp > 0.0 {
        ui_scale / native_ppp
    } else {
        ui_scale
    }
}

/// Zooms `ctx` so its pixels-per-point becomes `ui_scale` on a window whose
/// native pixels-per-point is `native_ppp`.
pub fn apply_scale(ctx: &egui::Context, ui_scale: f32, native_ppp: f32) {
    ctx.set_zoom_factor(zoom_for(ui_scale, native_ppp));
}

fn record_flags(flags: &GuiFlags) {
    log::debug!("gui flags: {flags:?}");
    if flags.keyboard_nav {
        log::debug!("keyboard navigation uses built-in focus handling");
    }
    for feature in flags.unsupported() {
        log::info!("{feature} requested but unavailable in this GUI backend");
    }
}
