use std::sync::Arc;

use glow::HasContext;
use thiserror::Error;

use super::shader::{ShaderError, ShaderProgram};
use super::transform::Transform;
use super::vertex::{decode_vertices, vertex_bytes, Vertex, VertexAttribute, VertexDecodeError, TRIANGLE};
use crate::core::Shutdown;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error("failed to create {what}: {reason}")]
    Create { what: &'static str, reason: String },

    #[error("vertex buffer read-back failed")]
    Readback(#[from] VertexDecodeError),

    #[error("vertex buffer content differs from the uploaded triangle")]
    VertexMismatch,
}

/// Draws the static triangle.
///
/// Owns one vertex buffer, the shader program and one vertex array object.
/// All of them are created in [`TriangleRenderer::new`] and only read during
/// [`TriangleRenderer::draw`].
pub struct TriangleRenderer {
    gl: Arc<glow::Context>,
    shader: ShaderProgram,
    vbo: glow::Buffer,
    vao: glow::VertexArray,
}

impl TriangleRenderer {
    /// Uploads the triangle, builds the program and describes the layout.
    ///
    /// Requires a current context.
    pub fn new(gl: Arc<glow::Context>) -> Result<Self, RenderError> {
        let shader = ShaderProgram::new(&gl)?;

        let vbo = match unsafe { gl.create_buffer() } {
            Ok(b) => b,
            Err(reason) => {
                shader.destroy(&gl);
                return Err(RenderError::Create { what: "vertex buffer", reason });
            }
        };
        unsafe {
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, vertex_bytes(&TRIANGLE), glow::STATIC_DRAW);
        }

        let vao = match unsafe { gl.create_vertex_array() } {
            Ok(v) => v,
            Err(reason) => {
                unsafe { gl.delete_buffer(vbo) };
                shader.destroy(&gl);
                return Err(RenderError::Create { what: "vertex array", reason });
            }
        };
        unsafe {
            gl.bind_vertex_array(Some(vao));
            enable_attribute(&gl, shader.vpos, Vertex::POSITION);
            enable_attribute(&gl, shader.vcol, Vertex::COLOR);
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }

        log::debug!("triangle resources created ({} vertices)", TRIANGLE.len());

        Ok(Self { gl, shader, vbo, vao })
    }

    /// Reads the vertex buffer back from the GPU.
    pub fn read_back(&self) -> Result<Vec<Vertex>, RenderError> {
        let mut bytes = vec![0u8; vertex_bytes(&TRIANGLE).len()];
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(self.vbo));
            self.gl.get_buffer_sub_data(glow::ARRAY_BUFFER, 0, &mut bytes);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
        Ok(decode_vertices(&bytes)?)
    }

    /// Checks that the GPU holds exactly the uploaded triangle.
    pub fn verify_upload(&self) -> Result<(), RenderError> {
        if self.read_back()? == TRIANGLE {
            Ok(())
        } else {
            Err(RenderError::VertexMismatch)
        }
    }

    /// Draws the triangle with `transform.mvp` into the bound framebuffer.
    pub fn draw(&self, transform: &Transform) {
        let gl = &self.gl;
        unsafe {
            gl.use_program(Some(self.shader.program));
            gl.uniform_matrix_4_f32_slice(Some(&self.shader.mvp), false, &transform.mvp.to_cols_array());
            gl.bind_vertex_array(Some(self.vao));
            gl.draw_arrays(glow::TRIANGLES, 0, TRIANGLE.len() as i32);
            gl.bind_vertex_array(None);
            gl.use_program(None);
        }
    }
}

impl Shutdown for TriangleRenderer {
    fn shutdown(&mut self) {
        unsafe {
            self.gl.delete_vertex_array(self.vao);
            self.gl.delete_buffer(self.vbo);
        }
        self.shader.destroy(&self.gl);
        log::debug!("triangle resources released");
    }
}

unsafe fn enable_attribute(gl: &glow::Context, location: u32, attr: VertexAttribute) {
    unsafe {
        gl.enable_vertex_attrib_array(location);
        gl.vertex_attrib_pointer_f32(
            location,
            attr.components,
            glow::FLOAT,
            false,
            Vertex::STRIDE,
            attr.offset,
        );
    }
}
