use anyhow::{Context, Result};
use egui_demo_lib::DemoWindows;

use hello_engine::core::{App, AppControl, FrameCtx, Scoped, StartCtx};
use hello_engine::gui::{debug_window, DebugStats};
use hello_engine::render::{Transform, TriangleRenderer};

/// The rotating triangle with egui's demo panel and a stats window on top.
#[derive(Default)]
pub struct TriangleDemo {
    triangle: Option<Scoped<TriangleRenderer>>,
    demo: DemoWindows,
}

impl TriangleDemo {
    fn build_gui(&mut self, gui: &egui::Context, stats: &DebugStats) {
        self.demo.ui(gui);
        debug_window(gui, stats);
    }
}

impl App for TriangleDemo {
    fn on_start(&mut self, ctx: &mut StartCtx<'_>) -> Result<()> {
        let renderer = Scoped::new(
            TriangleRenderer::new(ctx.gl.clone()).context("failed to create triangle resources")?,
        );
        if let Some(r) = renderer.get() {
            r.verify_upload().context("vertex upload check failed")?;
        }
        self.triangle = Some(renderer);
        log::info!("triangle ready");
        Ok(())
    }

    fn on_gui(&mut self, gui: &egui::Context, frame: &FrameCtx<'_>) {
        self.build_gui(gui, &DebugStats::from_frame(frame));
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let triangle = self.triangle.as_ref().and_then(|t| t.get());
        let (Some(aspect), Some(triangle)) = (ctx.aspect, triangle) else {
            return AppControl::Continue;
        };

        // Angle in radians equals absolute elapsed seconds.
        triangle.draw(&Transform::new(aspect, ctx.time.elapsed));
        AppControl::Continue
    }

    fn on_exit(&mut self) {
        if let Some(mut triangle) = self.triangle.take() {
            triangle.shutdown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> DebugStats {
        DebugStats {
            frame_index: 1,
            fps: 60.0,
            elapsed: 0.5,
            framebuffer: (1920, 1080),
            aspect: Some(1920.0 / 1080.0),
            dpi_scale: 1.0,
        }
    }

    fn shape_count(ctx: &egui::Context, mut build: impl FnMut(&egui::Context)) -> usize {
        // New windows are laid out invisibly on their first frame.
        let _ = ctx.run(egui::RawInput::default(), &mut build);
        ctx.run(egui::RawInput::default(), &mut build).shapes.len()
    }

    #[test]
    fn gui_includes_the_library_demo_panel() {
        let stats = stats();

        let only_stats = shape_count(&egui::Context::default(), |ctx| debug_window(ctx, &stats));

        let mut demo = TriangleDemo::default();
        let with_demo = shape_count(&egui::Context::default(), |ctx| demo.build_gui(ctx, &stats));

        assert!(with_demo > only_stats);
    }
}
