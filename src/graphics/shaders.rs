//! Shader-stage compilation and program linking.
//!
//! Sources live in plain text files under `res/shaders/` and are compiled at
//! startup. Compilation failures come back as [`ShaderError`] values carrying
//! the stage kind and the driver's diagnostic log, so a bad stage can never
//! be attached to a program by accident. Link and validate failures, on the
//! other hand, are only logged: the program handle is returned regardless and
//! the driver surfaces the problem on first use.

use std::ffi::CString;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::ptr::{null, null_mut};

use gl;
use gl::types::{GLchar, GLenum, GLint, GLuint};

use log::warn;

use super::state::GlState;

/// The two pipeline stages the tutorials use.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub fn raw(self) -> GLenum {
        match self {
            ShaderStage::Vertex => gl::VERTEX_SHADER,
            ShaderStage::Fragment => gl::FRAGMENT_SHADER,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }
}

/// Why a shader stage could not be produced.
#[derive(Debug)]
pub enum ShaderError {
    /// The source file could not be read.
    Io { path: PathBuf, message: String },
    /// The driver rejected the source; `log` is its diagnostic text.
    Compile { stage: ShaderStage, log: String },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ShaderError::Io { path, message } => {
                write!(f, "error reading shader source {}: {}", path.display(), message)
            }
            ShaderError::Compile { stage, log } => {
                write!(f, "{} shader failed to compile: {}", stage.name(), log)
            }
        }
    }
}

/// Reads a shader source file fully into memory, line by line, appending a
/// newline after each line.
pub fn load_source<P: AsRef<Path>>(path: P) -> Result<String, ShaderError> {
    let path = path.as_ref();
    let io_err = |e: std::io::Error| ShaderError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let file = File::open(path).map_err(io_err)?;
    let mut source = String::new();

    for line in BufReader::new(file).lines() {
        source.push_str(&line.map_err(io_err)?);
        source.push('\n');
    }

    Ok(source)
}

/// A compiled shader stage, released when dropped.
pub struct GlShader {
    id: GLuint,
}

impl GlShader {
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Submits `source` to the driver for compilation.
    ///
    /// On failure the partially created stage object is released before the
    /// driver's log is returned.
    pub fn compile(stage: ShaderStage, source: &str) -> Result<Self, ShaderError> {
        let src = CString::new(source).map_err(|_| ShaderError::Compile {
            stage,
            log: String::from("source contains an interior NUL byte"),
        })?;

        let id = unsafe { gl::CreateShader(stage.raw()) };
        unsafe {
            gl::ShaderSource(id, 1, &src.as_ptr(), null());
            gl::CompileShader(id);
        }

        let mut success: GLint = 1;
        unsafe {
            gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let log = shader_info_log(id);
            unsafe {
                gl::DeleteShader(id);
            }
            return Err(ShaderError::Compile { stage, log });
        }

        Ok(GlShader { id })
    }
}

impl Drop for GlShader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteShader(self.id);
        }
    }
}

/// A linked shader program, released when dropped.
pub struct GlProgram {
    id: GLuint,
}

impl GlProgram {
    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Compiles the vertex stage, then the fragment stage, attaches both,
    /// links and validates.
    ///
    /// Stage compilation failures propagate. Link and validate failures do
    /// not: they are logged as warnings and the program handle is returned
    /// anyway. The stage objects are released before returning; the linked
    /// program keeps its own copy of their code.
    pub fn build(vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
        let vert = GlShader::compile(ShaderStage::Vertex, vertex_source)?;
        let frag = GlShader::compile(ShaderStage::Fragment, fragment_source)?;

        let id = unsafe { gl::CreateProgram() };
        unsafe {
            gl::AttachShader(id, vert.id());
            gl::AttachShader(id, frag.id());
            gl::LinkProgram(id);
            gl::ValidateProgram(id);
        }

        let mut linked: GLint = 1;
        unsafe {
            gl::GetProgramiv(id, gl::LINK_STATUS, &mut linked);
        }
        if linked == 0 {
            warn!("program link failed: {}", program_info_log(id));
        }

        let mut valid: GLint = 1;
        unsafe {
            gl::GetProgramiv(id, gl::VALIDATE_STATUS, &mut valid);
        }
        if valid == 0 {
            warn!("program validation failed: {}", program_info_log(id));
        }

        unsafe {
            gl::DetachShader(id, vert.id());
            gl::DetachShader(id, frag.id());
        }

        // vert and frag drop here, releasing the stage objects.
        Ok(GlProgram { id })
    }

    /// Loads both stage sources from files and builds the program.
    pub fn from_files<P: AsRef<Path>>(vertex_path: P, fragment_path: P) -> Result<Self, ShaderError> {
        let vertex_source = load_source(vertex_path)?;
        let fragment_source = load_source(fragment_path)?;
        Self::build(&vertex_source, &fragment_source)
    }

    /// Activates this program for subsequent draw calls, replacing whichever
    /// program was active.
    pub fn set_used(&self, state: &mut GlState) {
        state.record_program(self.id);
        unsafe {
            gl::UseProgram(self.id);
        }
    }
}

impl Drop for GlProgram {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

fn shader_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe {
        gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }

    let buf = blank_cstring(len.max(0) as usize);
    unsafe {
        gl::GetShaderInfoLog(id, len, null_mut(), buf.as_ptr() as *mut GLchar);
    }

    buf.to_string_lossy().trim_end().to_owned()
}

fn program_info_log(id: GLuint) -> String {
    let mut len: GLint = 0;
    unsafe {
        gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
    }

    let buf = blank_cstring(len.max(0) as usize);
    unsafe {
        gl::GetProgramInfoLog(id, len, null_mut(), buf.as_ptr() as *mut GLchar);
    }

    buf.to_string_lossy().trim_end().to_owned()
}

/// A whitespace-filled `CString` the driver can write an info log into.
fn blank_cstring(len: usize) -> CString {
    let buf = vec![b' '; len];
    unsafe { CString::from_vec_unchecked(buf) }
}

#[cfg(test)]
mod test {
    use super::{load_source, blank_cstring, ShaderError, ShaderStage};

    #[test]
    fn load_source_appends_a_newline_per_line() {
        let source = load_source("res/shaders/vertex.shader").unwrap();

        assert!(source.starts_with("#version 330 core\n"));
        assert!(source.ends_with('\n'));
        assert_eq!(source.lines().count(), source.matches('\n').count());
    }

    #[test]
    fn load_source_reports_the_missing_path() {
        let err = load_source("res/shaders/no_such.shader").unwrap_err();

        match err {
            ShaderError::Io { path, .. } => {
                assert!(path.ends_with("no_such.shader"));
            }
            other => panic!("expected an Io error, got: {}", other),
        }
    }

    #[test]
    fn compile_errors_name_their_stage() {
        let err = ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log: String::from("0:1(1): error: syntax error"),
        };

        let text = err.to_string();
        assert!(text.contains("vertex"));
        assert!(text.contains("syntax error"));
    }

    #[test]
    fn stage_names_match_their_driver_enums() {
        assert_eq!(ShaderStage::Vertex.name(), "vertex");
        assert_eq!(ShaderStage::Fragment.name(), "fragment");
        assert_eq!(ShaderStage::Vertex.raw(), gl::VERTEX_SHADER);
        assert_eq!(ShaderStage::Fragment.raw(), gl::FRAGMENT_SHADER);
    }

    #[test]
    fn blank_cstrings_reserve_the_requested_length() {
        assert_eq!(blank_cstring(8).as_bytes().len(), 8);
        assert_eq!(blank_cstring(0).as_bytes().len(), 0);
    }
}
