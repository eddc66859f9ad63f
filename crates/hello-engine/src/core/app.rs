use super::ctx::{FrameCtx, StartCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Callbacks run on the main thread with the GL context current. Per frame the
/// runtime calls [`App::on_gui`] first, then [`App::on_frame`]; the GUI is
/// painted after `on_frame` so it always lands on top of the scene.
pub trait App {
    /// Called once after the window, GL context and GUI exist.
    ///
    /// An error aborts startup; the runtime releases everything created so far
    /// and returns the error.
    fn on_start(&mut self, ctx: &mut StartCtx<'_>) -> anyhow::Result<()>;

    /// Builds this frame's GUI.
    fn on_gui(&mut self, gui: &egui::Context, frame: &FrameCtx<'_>) {
        let _ = (gui, frame);
    }

    /// Issues this frame's draw calls.
    ///
    /// Not called for frames whose framebuffer has no area.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Releases app-owned GL resources. Called once, context still current.
    fn on_exit(&mut self) {}
}
