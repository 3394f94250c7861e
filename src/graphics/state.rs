//! Explicit model of the driver's global binding points.
//!
//! The driver keeps one "currently bound" slot per target, and binding
//! anything silently overwrites that slot for every later call. Routing
//! binds through a [`GlState`] passed by reference keeps that side effect
//! visible at the call site and lets the bookkeeping be tested without a
//! live context.

use std::mem;

use gl;
use gl::types::{GLenum, GLuint};

/// The two buffer targets the tutorials touch.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferTarget {
    /// Vertex attribute data (`GL_ARRAY_BUFFER`).
    Array,
    /// Vertex indices (`GL_ELEMENT_ARRAY_BUFFER`).
    ElementArray,
}

impl BufferTarget {
    pub fn raw(self) -> GLenum {
        match self {
            BufferTarget::Array => gl::ARRAY_BUFFER,
            BufferTarget::ElementArray => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// Tracked copy of the driver's mutable binding state.
///
/// Handle 0 means "nothing bound", same as the driver's convention.
#[derive(Debug, Default)]
pub struct GlState {
    array_buffer: GLuint,
    element_array_buffer: GLuint,
    program: GLuint,
}

impl GlState {
    pub fn new() -> Self {
        GlState::default()
    }

    /// Records `id` as bound to `target`, returning the binding it replaced.
    pub(crate) fn record_buffer(&mut self, target: BufferTarget, id: GLuint) -> GLuint {
        let slot = match target {
            BufferTarget::Array => &mut self.array_buffer,
            BufferTarget::ElementArray => &mut self.element_array_buffer,
        };

        mem::replace(slot, id)
    }

    /// Records `id` as the active program, returning the one it replaced.
    pub(crate) fn record_program(&mut self, id: GLuint) -> GLuint {
        mem::replace(&mut self.program, id)
    }

    pub fn bound_buffer(&self, target: BufferTarget) -> GLuint {
        match target {
            BufferTarget::Array => self.array_buffer,
            BufferTarget::ElementArray => self.element_array_buffer,
        }
    }

    pub fn bound_program(&self) -> GLuint {
        self.program
    }
}

#[cfg(test)]
mod test {
    use super::{BufferTarget, GlState};

    #[test]
    fn fresh_state_has_nothing_bound() {
        let state = GlState::new();

        assert_eq!(state.bound_buffer(BufferTarget::Array), 0);
        assert_eq!(state.bound_buffer(BufferTarget::ElementArray), 0);
        assert_eq!(state.bound_program(), 0);
    }

    #[test]
    fn binding_overwrites_and_reports_the_previous_binding() {
        let mut state = GlState::new();

        assert_eq!(state.record_buffer(BufferTarget::Array, 3), 0);
        assert_eq!(state.record_buffer(BufferTarget::Array, 7), 3);
        assert_eq!(state.bound_buffer(BufferTarget::Array), 7);
    }

    #[test]
    fn targets_are_independent() {
        let mut state = GlState::new();

        state.record_buffer(BufferTarget::Array, 3);
        state.record_buffer(BufferTarget::ElementArray, 9);

        assert_eq!(state.bound_buffer(BufferTarget::Array), 3);
        assert_eq!(state.bound_buffer(BufferTarget::ElementArray), 9);
    }

    #[test]
    fn unbinding_resets_to_zero() {
        let mut state = GlState::new();

        state.record_buffer(BufferTarget::Array, 5);
        assert_eq!(state.record_buffer(BufferTarget::Array, 0), 5);
        assert_eq!(state.bound_buffer(BufferTarget::Array), 0);
    }

    #[test]
    fn program_binding_is_tracked_separately() {
        let mut state = GlState::new();

        state.record_buffer(BufferTarget::Array, 2);
        assert_eq!(state.record_program(4), 0);
        assert_eq!(state.bound_program(), 4);
        assert_eq!(state.bound_buffer(BufferTarget::Array), 2);
    }
}
