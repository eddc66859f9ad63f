//! Triangle shader program: embedded GLSL sources, compile + link, and the
//! cached uniform/attribute locations.

use std::fmt;

use glow::HasContext;
use thiserror::Error;

use super::vertex::Vertex;

/// Name of the combined transform uniform in [`VERTEX_SHADER`].
pub const MVP_UNIFORM: &str = "MVP";

pub const VERTEX_SHADER: &str = r#"#version 330
uniform mat4 MVP;
in vec3 vCol;
in vec2 vPos;
out vec3 color;
void main()
{
    gl_Position = MVP * vec4(vPos, 0.0, 1.0);
    color = vCol;
}
"#;

pub const FRAGMENT_SHADER: &str = r#"#version 330
in vec3 color;
out vec4 fragment;
void main()
{
    fragment = vec4(color, 1.0);
}
"#;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    fn gl_kind(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("failed to create {what}: {reason}")]
    Create { what: &'static str, reason: String },

    #[error("shader compile failed: {stage}: {log}")]
    Compile { stage: ShaderStage, log: String },

    #[error("link failed: {log}")]
    Link { log: String },

    #[error("uniform `{0}` not found in linked program")]
    MissingUniform(&'static str),

    #[error("attribute `{0}` not found in linked program")]
    MissingAttribute(&'static str),
}

/// Linked triangle program with its cached locations.
#[derive(Debug)]
pub struct ShaderProgram {
    pub program: glow::Program,
    pub mvp: glow::UniformLocation,
    pub vpos: u32,
    pub vcol: u32,
}

impl ShaderProgram {
    /// Compiles both stages, links them and looks up every location the
    /// draw path needs. Nothing is returned unless all of it succeeded.
    pub fn new(gl: &glow::Context) -> Result<Self, ShaderError> {
        let vs = compile(gl, ShaderStage::Vertex, VERTEX_SHADER)?;
        let fs = match compile(gl, ShaderStage::Fragment, FRAGMENT_SHADER) {
            Ok(fs) => fs,
            Err(e) => {
                unsafe { gl.delete_shader(vs) };
                return Err(e);
            }
        };

        let program = link(gl, vs, fs);
        // Stage objects are no longer needed once linking was attempted.
        unsafe {
            gl.delete_shader(vs);
            gl.delete_shader(fs);
        }
        let program = program?;

        match locate(gl, program) {
            Ok((mvp, vpos, vcol)) => {
                log::debug!("shader program linked (vPos={vpos}, vCol={vcol})");
                Ok(Self { program, mvp, vpos, vcol })
            }
            Err(e) => {
                unsafe { gl.delete_program(program) };
                Err(e)
            }
        }
    }

    pub fn destroy(&self, gl: &glow::Context) {
        unsafe { gl.delete_program(self.program) };
    }
}

fn compile(gl: &glow::Context, stage: ShaderStage, source: &str) -> Result<glow::Shader, ShaderError> {
    unsafe {
        let shader = gl
            .create_shader(stage.gl_kind())
            .map_err(|reason| ShaderError::Create { what: "shader", reason })?;
        gl.shader_source(shader, source);
        gl.compile_shader(shader);

        if gl.get_shader_compile_status(shader) {
            Ok(shader)
        } else {
            let log = gl.get_shader_info_log(shader);
            gl.delete_shader(shader);
            Err(ShaderError::Compile { stage, log })
        }
    }
}

fn link(gl: &glow::Context, vs: glow::Shader, fs: glow::Shader) -> Result<glow::Program, ShaderError> {
    unsafe {
        let program = gl
            .create_program()
            .map_err(|reason| ShaderError::Create { what: "program", reason })?;
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        let linked = gl.get_program_link_status(program);
        gl.detach_shader(program, vs);
        gl.detach_shader(program, fs);

        if linked {
            Ok(program)
        } else {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            Err(ShaderError::Link { log })
        }
    }
}

fn locate(
    gl: &glow::Context,
    program: glow::Program,
) -> Result<(glow::UniformLocation, u32, u32), ShaderError> {
    unsafe {
        let mvp = gl
            .get_uniform_location(program, MVP_UNIFORM)
            .ok_or(ShaderError::MissingUniform(MVP_UNIFORM))?;
        let vpos = gl
            .get_attrib_location(program, Vertex::POSITION.name)
            .ok_or(ShaderError::MissingAttribute(Vertex::POSITION.name))?;
        let vcol = gl
            .get_attrib_location(program, Vertex::COLOR.name)
            .ok_or(ShaderError::MissingAttribute(Vertex::COLOR.name))?;
        Ok((mvp, vpos, vcol))
    }
}
