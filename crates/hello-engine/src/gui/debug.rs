use std::f32::consts::TAU;

use crate::core::FrameCtx;

/// Title of the debug window.
pub const DEBUG_WINDOW_TITLE: &str = "Debug";

/// Numbers shown in the debug window for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DebugStats {
    pub frame_index: u64,
    pub fps: f32,
    pub elapsed: f32,
    pub framebuffer: (u32, u32),
    pub aspect: Option<f32>,
    pub dpi_scale: f32,
}

impl DebugStats {
    pub fn from_frame(frame: &FrameCtx<'_>) -> Self {
        let fb = frame.render.framebuffer;
        Self {
            frame_index: frame.time.frame_index,
            fps: frame.time.fps(),
            elapsed: frame.time.elapsed,
            framebuffer: (fb.width, fb.height),
            aspect: frame.aspect,
            dpi_scale: frame.dpi_scale,
        }
    }

    /// Triangle rotation in degrees, wrapped to `[0, 360)`.
    pub fn angle_degrees(&self) -> f32 {
        self.elapsed.rem_euclid(TAU).to_degrees()
    }

    /// Label/value pairs in display order.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        let (w, h) = self.framebuffer;
        vec![
            ("Frame", self.frame_index.to_string()),
            ("FPS", format!("{:.1}", self.fps)),
            ("Elapsed", format!("{:.2} s", self.elapsed)),
            ("Angle", format!("{:.1}°", self.angle_degrees())),
            ("Framebuffer", format!("{w}x{h}")),
            (
                "Aspect",
                self.aspect.map_or_else(|| "-".to_string(), |a| format!("{a:.3}")),
            ),
            ("DPI scale", format!("{:.2}", self.dpi_scale)),
        ]
    }
}

/// Builds the debug window: frame stats plus the GUI's own settings,
/// inspection and memory panels.
pub fn debug_window(ctx: &egui::Context, stats: &DebugStats) {
    egui::Window::new(DEBUG_WINDOW_TITLE)
        .default_open(true)
        .show(ctx, |ui| {
            egui::Grid::new("frame_stats")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    for (label, value) in stats.rows() {
                        ui.label(label);
                        ui.monospace(value);
                        ui.end_row();
                    }
                });

            ui.separator();
            ui.collapsing("Settings", |ui| ctx.settings_ui(ui));
            ui.collapsing("Inspection", |ui| ctx.inspection_ui(ui));
            ui.collapsing("Memory", |ui| ctx.memory_ui(ui));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> DebugStats {
        DebugStats {
            frame_index: 42,
            fps: 60.0,
            elapsed: 1.5,
            framebuffer: (1920, 1080),
            aspect: Some(1920.0 / 1080.0),
            dpi_scale: 1.25,
        }
    }

    #[test]
    fn rows_format_each_stat() {
        let rows = stats().rows();
        let get = |name: &str| rows.iter().find(|(l, _)| *l == name).unwrap().1.clone();

        assert_eq!(get("Frame"), "42");
        assert_eq!(get("FPS"), "60.0");
        assert_eq!(get("Elapsed"), "1.50 s");
        assert_eq!(get("Framebuffer"), "1920x1080");
        assert_eq!(get("Aspect"), "1.778");
        assert_eq!(get("DPI scale"), "1.25");
    }

    #[test]
    fn minimized_framebuffer_has_no_aspect() {
        let s = DebugStats { framebuffer: (0, 0), aspect: None, ..stats() };
        assert!(s.rows().contains(&("Aspect", "-".to_string())));
    }

    #[test]
    fn angle_wraps_full_turns() {
        let s = DebugStats { elapsed: TAU + std::f32::consts::PI, ..stats() };
        assert!((s.angle_degrees() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn window_builds_without_a_painter() {
        let ctx = egui::Context::default();
        // New windows are laid out invisibly on their first frame.
        let _ = ctx.run(egui::RawInput::default(), |ctx| debug_window(ctx, &stats()));
        let output = ctx.run(egui::RawInput::default(), |ctx| debug_window(ctx, &stats()));
        assert!(!output.shapes.is_empty());
    }
}
