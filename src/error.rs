//! Failure taxonomy for the demo.
//!
//! Every detected failure terminates the process; setup code signals
//! failures as [`DemoError`] values and only `main` turns them into
//! exit codes.
use thiserror::Error;

/// Everything that can go wrong before and during setup.
///
/// Each variant maps to a distinct process exit code, see
/// [`DemoError::exit_code`]. Exit code `0` is reserved for a normal
/// user-requested close.
#[derive(Debug, Error)]
pub enum DemoError {
    /// SDL init, window creation or GL context creation failed.
    #[error("failed to create window/GL context: {0}")]
    WindowCreation(String),
    /// The vertex shader did not compile. Carries the GL info log.
    #[error("vertex shader compilation failed: {0}")]
    CompileVertex(String),
    /// The fragment shader did not compile. Carries the GL info log.
    #[error("fragment shader compilation failed: {0}")]
    CompileFragment(String),
    /// The shader program did not link. Carries the GL info log.
    #[error("program link failed: {0}")]
    LinkProgram(String),
}

impl DemoError {
    /// The exit code the process reports for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            DemoError::WindowCreation(_) => 1,
            DemoError::CompileVertex(_) => 2,
            DemoError::CompileFragment(_) => 3,
            DemoError::LinkProgram(_) => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DemoError;

    #[test]
    fn each_failure_class_has_a_distinct_exit_code() {
        let errors = [
            DemoError::WindowCreation(String::from("no display")),
            DemoError::CompileVertex(String::from("syntax error")),
            DemoError::CompileFragment(String::from("syntax error")),
            DemoError::LinkProgram(String::from("interface mismatch")),
        ];
        let codes: Vec<u8> = errors.iter().map(DemoError::exit_code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn diagnostics_carry_the_info_log_verbatim() {
        let err = DemoError::CompileVertex(String::from("0:3: 'vec5' : undeclared identifier"));
        assert!(err.to_string().contains("0:3: 'vec5' : undeclared identifier"));
    }
}
