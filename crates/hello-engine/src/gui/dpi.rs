//! UI scale policy.
//!
//! The UI is scaled by the largest scale factor among all connected monitors,
//! never below 1.0. The value is computed once at startup.

use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;

/// Reference DPI of a monitor with scale factor 1.0.
pub const BASE_DPI: f64 = 96.0;

/// What the runtime knows about one monitor.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorInfo {
    pub name: String,
    pub size: PhysicalSize<u32>,
    pub scale: f64,
}

impl MonitorInfo {
    pub fn dpi(&self) -> f64 {
        BASE_DPI * self.scale
    }
}

/// Maximum of 1.0 and every finite, positive scale in `scales`.
pub fn max_monitor_scale<I>(scales: I) -> f32
where
    I: IntoIterator<Item = f64>,
{
    scales
        .into_iter()
        .filter(|s| s.is_finite() && *s > 0.0)
        .fold(1.0_f64, f64::max) as f32
}

/// Enumerates the connected monitors.
pub fn monitors(event_loop: &ActiveEventLoop) -> Vec<MonitorInfo> {
    event_loop
        .available_monitors()
        .enumerate()
        .map(|(i, m)| MonitorInfo {
            name: m.name().unwrap_or_else(|| format!("#{i}")),
            size: m.size(),
            scale: m.scale_factor(),
        })
        .collect()
}

/// Logs every monitor and returns the UI scale for them.
pub fn detect_scale(event_loop: &ActiveEventLoop) -> f32 {
    let monitors = monitors(event_loop);
    for m in &monitors {
        log::info!(
            "monitor {}: {}x{}, DPI {:.0} ({}x)",
            m.name,
            m.size.width,
            m.size.height,
            m.dpi(),
            m.scale
        );
    }

    let scale = max_monitor_scale(monitors.iter().map(|m| m.scale));
    log::info!("UI scale {scale} over {} monitor(s)", monitors.len());
    scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_the_largest_scale() {
        assert_eq!(max_monitor_scale([1.0, 2.0, 1.5]), 2.0);
        assert_eq!(max_monitor_scale([1.25]), 1.25);
    }

    #[test]
    fn never_below_one() {
        assert_eq!(max_monitor_scale([0.5, 0.75]), 1.0);
        assert_eq!(max_monitor_scale(std::iter::empty()), 1.0);
    }

    #[test]
    fn ignores_invalid_scales() {
        assert_eq!(max_monitor_scale([f64::NAN, f64::INFINITY, -2.0, 1.5]), 1.5);
    }

    #[test]
    fn dpi_is_96_per_unit_scale() {
        let m = MonitorInfo {
            name: "test".to_string(),
            size: PhysicalSize::new(3840, 2160),
            scale: 1.5,
        };
        assert_eq!(m.dpi(), 144.0);
    }
}
