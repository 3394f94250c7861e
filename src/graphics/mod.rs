//! A small set of safe wrappers around the raw OpenGL calls the tutorial
//! scenes need: single-owner buffer objects, shader compilation with real
//! error values, an explicit model of the driver's binding state, and the
//! `gl_call!` error-queue instrumentation macro.
//!
//! Everything here assumes a current context on the calling thread; the
//! scenes create one before touching any of it.

pub mod buffers;
pub mod error;
pub mod shaders;
pub mod state;

use std::ffi::CStr;
use std::os::raw::c_char;

use gl;

/// The driver's version string, if the symbol loader produced one.
///
/// A null return here usually means symbol loading failed; callers report it
/// and carry on, matching the loader's own non-fatal treatment.
pub fn driver_version() -> Option<String> {
    let raw = unsafe { gl::GetString(gl::VERSION) };

    if raw.is_null() {
        None
    } else {
        let version = unsafe { CStr::from_ptr(raw as *const c_char) };
        Some(version.to_string_lossy().into_owned())
    }
}
