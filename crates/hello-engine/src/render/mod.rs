//! OpenGL rendering subsystem.
//!
//! Renderers own their GL resources (buffers, programs, vertex arrays) and
//! issue draw calls through `glow`. The triangle renderer is the only one.
//!
//! Convention:
//! - geometry is in normalized object space, centered on the origin
//! - the vertex shader applies a single combined `MVP` matrix

mod ctx;
pub mod shader;
pub mod transform;
mod triangle;
pub mod vertex;

pub use ctx::RenderCtx;
pub use shader::{ShaderError, ShaderProgram, ShaderStage};
pub use transform::{aspect_ratio, OrthoBounds, Transform};
pub use triangle::{RenderError, TriangleRenderer};
pub use vertex::{Vertex, TRIANGLE};
