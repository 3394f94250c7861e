//! Driver error-queue instrumentation.
//!
//! OpenGL reports errors through a global, cumulative flag queue: any call
//! may raise flags, and they sit there until someone polls them with
//! `glGetError`. That makes attribution the whole problem — a flag you read
//! now may have been raised twenty calls ago. The [`gl_call!`] macro solves
//! this the usual way: drain the queue right before the call under
//! inspection, run it, then report whatever the queue holds afterwards.

use std::fmt;

use gl;
use gl::types::GLenum;

use log::error;

/// A decoded driver error flag.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlErrorCode {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    InvalidFramebufferOperation,
    Unknown(GLenum),
}

impl GlErrorCode {
    /// Decodes a raw `glGetError` value. `GL_NO_ERROR` decodes to `None`.
    pub fn from_raw(raw: GLenum) -> Option<Self> {
        match raw {
            gl::NO_ERROR => None,
            gl::INVALID_ENUM => Some(GlErrorCode::InvalidEnum),
            gl::INVALID_VALUE => Some(GlErrorCode::InvalidValue),
            gl::INVALID_OPERATION => Some(GlErrorCode::InvalidOperation),
            gl::STACK_OVERFLOW => Some(GlErrorCode::StackOverflow),
            gl::STACK_UNDERFLOW => Some(GlErrorCode::StackUnderflow),
            gl::OUT_OF_MEMORY => Some(GlErrorCode::OutOfMemory),
            gl::INVALID_FRAMEBUFFER_OPERATION => {
                Some(GlErrorCode::InvalidFramebufferOperation)
            }
            other => Some(GlErrorCode::Unknown(other)),
        }
    }

    pub fn raw(self) -> GLenum {
        match self {
            GlErrorCode::InvalidEnum => gl::INVALID_ENUM,
            GlErrorCode::InvalidValue => gl::INVALID_VALUE,
            GlErrorCode::InvalidOperation => gl::INVALID_OPERATION,
            GlErrorCode::StackOverflow => gl::STACK_OVERFLOW,
            GlErrorCode::StackUnderflow => gl::STACK_UNDERFLOW,
            GlErrorCode::OutOfMemory => gl::OUT_OF_MEMORY,
            GlErrorCode::InvalidFramebufferOperation => {
                gl::INVALID_FRAMEBUFFER_OPERATION
            }
            GlErrorCode::Unknown(raw) => raw,
        }
    }

    fn name(self) -> &'static str {
        match self {
            GlErrorCode::InvalidEnum => "GL_INVALID_ENUM",
            GlErrorCode::InvalidValue => "GL_INVALID_VALUE",
            GlErrorCode::InvalidOperation => "GL_INVALID_OPERATION",
            GlErrorCode::StackOverflow => "GL_STACK_OVERFLOW",
            GlErrorCode::StackUnderflow => "GL_STACK_UNDERFLOW",
            GlErrorCode::OutOfMemory => "GL_OUT_OF_MEMORY",
            GlErrorCode::InvalidFramebufferOperation => {
                "GL_INVALID_FRAMEBUFFER_OPERATION"
            }
            GlErrorCode::Unknown(_) => "unrecognized error flag",
        }
    }
}

impl fmt::Display for GlErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} (0x{:04X})", self.name(), self.raw())
    }
}

/// Polls and discards the driver's error queue until it is empty.
///
/// Must run immediately before the call being checked; the queue is global
/// and cumulative, so stale flags from unrelated calls would otherwise be
/// misattributed.
pub fn clear_gl_errors() {
    while unsafe { gl::GetError() } != gl::NO_ERROR {}
}

/// Reports every error flag raised since the last drain, tagged with the
/// call text and source location. Returns true iff the queue was empty.
pub fn log_gl_errors(call: &str, file: &str, line: u32) -> bool {
    let mut clean = true;

    loop {
        let raw = unsafe { gl::GetError() };
        match GlErrorCode::from_raw(raw) {
            None => break,
            Some(code) => {
                error!("[OpenGL error] {}: {} at {}:{}", code, call, file, line);
                clean = false;
            }
        }
    }

    clean
}

/// Runs one raw driver call with error-queue instrumentation.
///
/// In debug builds this drains the queue, issues the call, then logs and
/// asserts on any flag the call raised. In release builds it expands to the
/// bare call. The call is issued inside an `unsafe` block either way.
#[macro_export]
macro_rules! gl_call {
    ($call:expr) => {{
        #[cfg(debug_assertions)]
        $crate::graphics::error::clear_gl_errors();

        let ret = unsafe { $call };

        debug_assert!($crate::graphics::error::log_gl_errors(
            stringify!($call),
            file!(),
            line!(),
        ));

        ret
    }};
}

#[cfg(test)]
mod test {
    use super::GlErrorCode;

    #[test]
    fn no_error_decodes_to_none() {
        assert_eq!(GlErrorCode::from_raw(gl::NO_ERROR), None);
    }

    #[test]
    fn every_named_flag_round_trips() {
        let flags = [
            gl::INVALID_ENUM,
            gl::INVALID_VALUE,
            gl::INVALID_OPERATION,
            gl::STACK_OVERFLOW,
            gl::STACK_UNDERFLOW,
            gl::OUT_OF_MEMORY,
            gl::INVALID_FRAMEBUFFER_OPERATION,
        ];

        for &raw in flags.iter() {
            let code = GlErrorCode::from_raw(raw).unwrap();
            assert_eq!(code.raw(), raw);
        }
    }

    #[test]
    fn unrecognized_flags_keep_their_code() {
        let code = GlErrorCode::from_raw(0xBEEF).unwrap();
        assert_eq!(code, GlErrorCode::Unknown(0xBEEF));
        assert_eq!(code.raw(), 0xBEEF);
    }

    #[test]
    fn display_shows_name_and_numeric_code() {
        let text = GlErrorCode::InvalidOperation.to_string();
        assert!(text.contains("GL_INVALID_OPERATION"));
        assert!(text.contains("0x0502"));
    }
}
