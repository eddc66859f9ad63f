use std::num::NonZeroU32;
use std::sync::Arc;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glow::HasContext as _;
use glutin_winit::{DisplayBuilder, GlWindow as _};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::{DeviceError, GlInit};
use crate::logging;

/// A window with a current OpenGL context bound to its surface.
///
/// This type is the low-level rendering context:
/// - owns the winit window and the glutin context/surface pair
/// - exposes the loaded GL entry points as a shared `glow::Context`
/// - resizes the surface and presents frames
///
/// Dropping it destroys the context, the surface and the window, in that order.
pub struct GlWindow {
    /// Loaded GL entry points, shared with the GUI painter.
    gl: Arc<glow::Context>,

    /// Context, current on the main thread for the whole session.
    gl_context: PossiblyCurrentContext,

    /// Surface bound to the window.
    gl_surface: Surface<WindowSurface>,

    window: Window,
}

impl GlWindow {
    /// Creates the window, a matching GL config and a current context.
    ///
    /// Any failure here is fatal for startup; partially created objects are
    /// released by their own drops.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attrs: WindowAttributes,
        init: &GlInit,
    ) -> Result<Self, DeviceError> {
        let template = ConfigTemplateBuilder::new()
            .with_depth_size(0)
            .with_stencil_size(0)
            .with_transparency(false);

        let (window, gl_config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs.clone()))
            .build(event_loop, template, pick_config)
            .map_err(|e| DeviceError::Config(e.to_string()))?;

        let window = match window {
            Some(w) => w,
            None => glutin_winit::finalize_window(event_loop, attrs, &gl_config)
                .map_err(DeviceError::WindowCreation)?,
        };
        log::debug!("window created with gl config {gl_config:?}");

        let raw_handle = window
            .window_handle()
            .map_err(DeviceError::WindowHandle)?
            .as_raw();

        let (major, minor) = init.version;
        let mut context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))));
        if init.core_profile {
            context_attrs = context_attrs.with_profile(GlProfile::Core);
        }
        let context_attrs = context_attrs.build(Some(raw_handle));

        let gl_display = gl_config.display();

        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attrs) }
            .map_err(|source| DeviceError::Context { major, minor, source })?;

        let surface_attrs = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .map_err(DeviceError::WindowHandle)?;

        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }
            .map_err(DeviceError::Surface)?;

        let gl_context = not_current
            .make_current(&gl_surface)
            .map_err(DeviceError::MakeCurrent)?;

        if init.vsync {
            if let Err(e) =
                gl_surface.set_swap_interval(&gl_context, SwapInterval::Wait(NonZeroU32::MIN))
            {
                logging::report_warning("vsync request rejected", &e);
            }
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        };
        log::info!("OpenGL context {major}.{minor} ready ({:?})", gl.version());

        Ok(Self {
            gl: Arc::new(gl),
            gl_context,
            gl_surface,
            window,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Returns the shared GL entry points.
    pub fn gl(&self) -> &Arc<glow::Context> {
        &self.gl
    }

    /// Returns the current drawable size in physical pixels.
    pub fn framebuffer_size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    /// Resizes the surface after a window resize.
    ///
    /// Zero-sized requests (minimized windows) are ignored; the surface keeps
    /// its previous size until the window is restored.
    pub fn resize(&self, new_size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (
            NonZeroU32::new(new_size.width),
            NonZeroU32::new(new_size.height),
        ) else {
            return;
        };
        self.gl_surface.resize(&self.gl_context, w, h);
    }

    /// Presents the back buffer. Blocks until the swap completes when vsync is on.
    pub fn swap_buffers(&self) -> Result<(), glutin::error::Error> {
        self.gl_surface.swap_buffers(&self.gl_context)
    }
}

/// Picks the config with the fewest samples; the demo draws without MSAA.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    fewest_samples(configs, |c| c.num_samples())
        .expect("glutin-winit only calls the picker after find_configs returned a non-empty list")
}

/// First item with the lowest sample count, `None` for an empty list.
fn fewest_samples<C>(items: impl Iterator<Item = C>, samples: impl Fn(&C) -> u8) -> Option<C> {
    items.reduce(|best, c| if samples(&c) < samples(&best) { c } else { best })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_lowest_sample_count() {
        let configs = [(0, 4u8), (1, 0), (2, 8), (3, 0)];
        let picked = fewest_samples(configs.into_iter(), |c| c.1);
        assert_eq!(picked, Some((1, 0)));
    }

    #[test]
    fn empty_list_picks_nothing() {
        let picked = fewest_samples(std::iter::empty::<(u32, u8)>(), |c| c.1);
        assert_eq!(picked, None);
    }
}
