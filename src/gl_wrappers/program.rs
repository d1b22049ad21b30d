//! Exports [`Program`].
use super::CompiledShader;

/// Wrapper for a linked OpenGL program.
///
/// <https://www.khronos.org/opengl/wiki/GLSL_Object#Program_objects>
///
/// The program object is never deleted; it lives until process exit.
pub struct Program {
    /// The internal OpenGL id for this object.
    id: gl::types::GLuint,
}

impl Program {
    /// Link a vertex and a fragment shader into a new program.
    ///
    /// # Errors
    /// Errors if linking was unsuccessful, with the info log from
    /// OpenGL.
    pub fn new(
        vert_shader: &CompiledShader,
        frag_shader: &CompiledShader,
    ) -> Result<Self, String> {
        let inner = unsafe {
            let program = gl::CreateProgram();
            gl::AttachShader(program, vert_shader.id());
            gl::AttachShader(program, frag_shader.id());
            gl::LinkProgram(program);

            let mut success = 0;
            gl::GetProgramiv(program, gl::LINK_STATUS, &mut success);
            if success != gl::TRUE.into() {
                let mut infolog: Vec<u8> = vec![0; 512];
                let mut length = 0;
                gl::GetProgramInfoLog(program, 512, &mut length, infolog.as_mut_ptr().cast());
                infolog.truncate(length.try_into().unwrap());
                return Err(String::from_utf8_lossy(&infolog).into_owned());
            }
            program
        };

        Ok(Self { id: inner })
    }
    /// Get the internal id of this program.
    pub fn id(&self) -> gl::types::GLuint {
        self.id
    }
}
