//! Single-owner wrappers around driver buffer objects.
//!
//! Each wrapper owns exactly one handle for the lifetime of the value and
//! releases it on drop, so a handle can never outlive its owner. Uploads
//! happen once, at construction, with static usage; after that the only
//! mutation is bind/unbind, which changes driver binding state rather than
//! the buffer's content.

use std::ffi::c_void;
use std::mem::size_of;

use gl;
use gl::types::{GLsizei, GLsizeiptr, GLuint};

use crate::gl_call;

use super::state::{BufferTarget, GlState};

/// Owns one buffer on the vertex-attribute target.
pub struct GlVertexBuffer {
    id: GLuint,
}

impl GlVertexBuffer {
    const TARGET: BufferTarget = BufferTarget::Array;

    /// Allocates a buffer object and uploads `data` once.
    ///
    /// The new buffer is bound only transiently for the upload; whatever
    /// binding `state` recorded beforehand is restored before returning.
    pub fn new(data: &[f32], state: &mut GlState) -> Self {
        let mut id = 0;
        gl_call!(gl::GenBuffers(1, &mut id));

        let previous = state.record_buffer(Self::TARGET, id);
        gl_call!(gl::BindBuffer(Self::TARGET.raw(), id));
        gl_call!(gl::BufferData(
            Self::TARGET.raw(),
            (data.len() * size_of::<f32>()) as GLsizeiptr,
            data.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        ));

        state.record_buffer(Self::TARGET, previous);
        gl_call!(gl::BindBuffer(Self::TARGET.raw(), previous));

        GlVertexBuffer { id }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Makes this buffer current on the vertex-attribute target, replacing
    /// whichever buffer was bound there.
    pub fn bind(&self, state: &mut GlState) {
        state.record_buffer(Self::TARGET, self.id);
        gl_call!(gl::BindBuffer(Self::TARGET.raw(), self.id));
    }

    /// Resets the vertex-attribute target to "nothing bound".
    pub fn unbind(state: &mut GlState) {
        state.record_buffer(Self::TARGET, 0);
        gl_call!(gl::BindBuffer(Self::TARGET.raw(), 0));
    }
}

impl Drop for GlVertexBuffer {
    fn drop(&mut self) {
        gl_call!(gl::DeleteBuffers(1, &self.id));
    }
}

/// Owns one buffer on the element-index target, plus its element count.
pub struct GlElementBuffer {
    id: GLuint,
    count: GLsizei,
}

impl GlElementBuffer {
    const TARGET: BufferTarget = BufferTarget::ElementArray;

    /// Allocates a buffer object and uploads `indices` once, recording the
    /// element count for later draw calls. Binding is transient, as with
    /// [`GlVertexBuffer::new`].
    pub fn new(indices: &[u32], state: &mut GlState) -> Self {
        let mut id = 0;
        gl_call!(gl::GenBuffers(1, &mut id));

        let previous = state.record_buffer(Self::TARGET, id);
        gl_call!(gl::BindBuffer(Self::TARGET.raw(), id));
        gl_call!(gl::BufferData(
            Self::TARGET.raw(),
            (indices.len() * size_of::<u32>()) as GLsizeiptr,
            indices.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        ));

        state.record_buffer(Self::TARGET, previous);
        gl_call!(gl::BindBuffer(Self::TARGET.raw(), previous));

        GlElementBuffer { id, count: indices.len() as GLsizei }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    /// Number of indices uploaded at construction.
    pub fn count(&self) -> GLsizei {
        self.count
    }

    /// Makes this buffer current on the element-index target, replacing
    /// whichever buffer was bound there.
    pub fn bind(&self, state: &mut GlState) {
        state.record_buffer(Self::TARGET, self.id);
        gl_call!(gl::BindBuffer(Self::TARGET.raw(), self.id));
    }

    /// Resets the element-index target to "nothing bound".
    pub fn unbind(state: &mut GlState) {
        state.record_buffer(Self::TARGET, 0);
        gl_call!(gl::BindBuffer(Self::TARGET.raw(), 0));
    }
}

impl Drop for GlElementBuffer {
    fn drop(&mut self) {
        gl_call!(gl::DeleteBuffers(1, &self.id));
    }
}
