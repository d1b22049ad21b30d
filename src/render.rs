//! One-shot render setup and the per-frame draw call.
use std::{ffi::CStr, ptr::null};

use gl::types as gltype;
use sdl2::video::GLContext;

use crate::{
    error::DemoError,
    gl_wrappers::{program::Program, shader::Shader},
};

macro_rules! include_cstr {
    ( $path:literal $(,)? ) => {{
        // Use a constant to force the verification to run at compile time.
        const VALUE: &'static ::core::ffi::CStr = match ::core::ffi::CStr::from_bytes_with_nul(
            concat!(include_str!($path), "\0").as_bytes(),
        ) {
            Ok(value) => value,
            Err(_) => panic!(concat!("interior NUL byte(s) in `", $path, "`")),
        };
        VALUE
    }};
}

const VERT_SHADER_SOURCE: &CStr = include_cstr!("../glsl/vert_shader.glsl");
const FRAG_SHADER_SOURCE: &CStr = include_cstr!("../glsl/frag_shader.glsl");

/// The one triangle this demo draws. Three vertices, xyz each,
/// tightly packed.
#[rustfmt::skip]
const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0, // left
     0.5, -0.5, 0.0, // right
     0.0,  0.5, 0.0, // top
];

const VERTEX_COUNT: i32 = (TRIANGLE_VERTICES.len() / 3) as i32;

const CLEAR_COLOR: [f32; 4] = [0.2, 0.2, 0.3, 1.0];

/// Handles produced once by [`Render::init`] and reused every frame.
///
/// The GL objects are never deleted; they live until process exit.
pub struct Render {
    vao: gltype::GLuint,
    vbo: gltype::GLuint,
    program: Program,
}

impl Render {
    /// Upload the triangle and build the shader program.
    ///
    /// # Errors
    /// Shader compilation and program link failures come back as the
    /// per-stage [`DemoError`] variants, carrying the GL info log.
    ///
    /// # Panics
    /// Panics if `gl_ctx` is not the current context.
    pub fn init(gl_ctx: &GLContext) -> Result<Self, DemoError> {
        assert!(
            gl_ctx.is_current(),
            "gl_ctx must be current in order to create a Render"
        );
        let (vao, vbo) = unsafe {
            let mut vbo = 0;
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            // bind the Vertex Array Object first, then bind and set vertex
            // buffers, and then configure attributes
            let mut vao = 0;
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::BufferData(
                gl::ARRAY_BUFFER,
                size_of_val(&TRIANGLE_VERTICES).try_into().unwrap(),
                TRIANGLE_VERTICES.as_ptr().cast(),
                gl::STATIC_DRAW,
            );
            (vao, vbo)
        };

        let vert_shader = Shader::vertex(VERT_SHADER_SOURCE.into())
            .compile()
            .map_err(DemoError::CompileVertex)?;
        let frag_shader = Shader::fragment(FRAG_SHADER_SOURCE.into())
            .compile()
            .map_err(DemoError::CompileFragment)?;

        let program = Program::new(&vert_shader, &frag_shader).map_err(DemoError::LinkProgram)?;
        // The linked program does not need the individual shader
        // objects anymore.
        drop(vert_shader);
        drop(frag_shader);

        unsafe {
            // position attrib
            gl::VertexAttribPointer(
                0,
                3,
                gl::FLOAT,
                gl::FALSE,
                (3 * size_of::<f32>()).try_into().unwrap(),
                null(),
            );
            gl::EnableVertexAttribArray(0);

            // reset bound arrays
            gl::BindVertexArray(0);
            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
        }

        log::debug!(
            "render setup done, vao: {vao}, vbo: {vbo}, program: {}",
            program.id()
        );
        Ok(Render { vao, vbo, program })
    }

    /// Clear the color buffer to the background color.
    pub fn clear(&mut self) {
        unsafe {
            gl::ClearColor(
                CLEAR_COLOR[0],
                CLEAR_COLOR[1],
                CLEAR_COLOR[2],
                CLEAR_COLOR[3],
            );
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    /// Draw the triangle. Exactly one draw call of three vertices.
    pub fn draw(&mut self) {
        unsafe {
            gl::UseProgram(self.program.id());
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, VERTEX_COUNT);
            gl::BindVertexArray(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FRAG_SHADER_SOURCE, TRIANGLE_VERTICES, VERTEX_COUNT, VERT_SHADER_SOURCE};

    #[test]
    fn triangle_is_three_packed_xyz_vertices() {
        assert_eq!(TRIANGLE_VERTICES.len(), 9);
        assert_eq!(VERTEX_COUNT, 3);
        // All coordinates stay inside clip space.
        assert!(TRIANGLE_VERTICES.iter().all(|c| (-1.0..=1.0).contains(c)));
    }

    #[test]
    fn embedded_shader_sources_are_present() {
        assert!(!VERT_SHADER_SOURCE.to_bytes().is_empty());
        assert!(!FRAG_SHADER_SOURCE.to_bytes().is_empty());
        // GLSL text must survive embedding unmangled.
        assert!(VERT_SHADER_SOURCE.to_str().unwrap().contains("#version"));
        assert!(FRAG_SHADER_SOURCE.to_str().unwrap().contains("#version"));
    }
}
