use glow::HasContext;
use winit::dpi::PhysicalSize;

/// Renderer-facing context for one frame (GL entry points + framebuffer size).
///
/// This is intentionally small and stable.
pub struct RenderCtx<'a> {
    pub gl: &'a glow::Context,
    /// Drawable size in physical pixels.
    pub framebuffer: PhysicalSize<u32>,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(gl: &'a glow::Context, framebuffer: PhysicalSize<u32>) -> Self {
        Self { gl, framebuffer }
    }

    /// Clears the color buffer.
    pub fn clear(&self, color: [f32; 4]) {
        let [r, g, b, a] = color;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Sets the viewport to the whole framebuffer.
    pub fn set_full_viewport(&self) {
        unsafe {
            self.gl.viewport(
                0,
                0,
                self.framebuffer.width as i32,
                self.framebuffer.height as i32,
            );
        }
    }
}
