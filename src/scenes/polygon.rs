//! Second scene: a vertex-colored hexagon drawn with an index buffer.
//!
//! The rim vertices are shared between neighboring triangles, so the mesh is
//! described once and an index buffer spells out the six triangles fanning
//! out from the center vertex.

use std::ffi::c_void;
use std::mem::size_of;
use std::process;
use std::ptr::null;

use gl;
use gl::types::GLsizeiptr;

use glutin::event::{Event, WindowEvent};
use glutin::event_loop::ControlFlow;

use log::error;

use crate::graphics::shaders::GlProgram;

// Interleaved [x, y, r, g, b]: a white center and six colored rim vertices.
const VERTICES: [f32; 35] = [
     0.0,   0.0,    1.0, 1.0, 1.0,
     0.8,   0.0,    1.0, 0.2, 0.2,
     0.4,   0.69,   1.0, 0.8, 0.2,
    -0.4,   0.69,   0.2, 1.0, 0.2,
    -0.8,   0.0,    0.2, 1.0, 0.8,
    -0.4,  -0.69,   0.2, 0.2, 1.0,
     0.4,  -0.69,   0.8, 0.2, 1.0,
];

// Six triangles sharing the center vertex.
const INDICES: [u32; 18] = [
    0, 1, 2,
    0, 2, 3,
    0, 3, 4,
    0, 4, 5,
    0, 5, 6,
    0, 6, 1,
];

pub fn run() -> ! {
    let (event_loop, context) = super::create_context("Hello, Hexagon", 1000, 1000);

    let mut vao = 0;
    unsafe {
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);
    }

    let stride = (5 * size_of::<f32>()) as i32;

    let mut vbo = 0;
    unsafe {
        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (VERTICES.len() * size_of::<f32>()) as GLsizeiptr,
            VERTICES.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        );

        // Attribute 0: position, the first two floats of each vertex.
        gl::EnableVertexAttribArray(0);
        gl::VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, stride, null());

        // Attribute 1: color, the remaining three.
        gl::EnableVertexAttribArray(1);
        gl::VertexAttribPointer(
            1,
            3,
            gl::FLOAT,
            gl::FALSE,
            stride,
            (2 * size_of::<f32>()) as *const c_void,
        );
    }

    let mut ebo = 0;
    unsafe {
        gl::GenBuffers(1, &mut ebo);
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo);
        gl::BufferData(
            gl::ELEMENT_ARRAY_BUFFER,
            (INDICES.len() * size_of::<u32>()) as GLsizeiptr,
            INDICES.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        );
    }

    let program = match GlProgram::from_files(
        "res/shaders/color_vertex.shader",
        "res/shaders/color_fragment.shader",
    ) {
        Ok(program) => program,
        Err(e) => {
            error!("{}", e);
            process::exit(-1);
        }
    };

    unsafe {
        gl::UseProgram(program.id());
    }

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                *control_flow = ControlFlow::Exit;
            }
            Event::MainEventsCleared => {
                context.window().request_redraw();
            }
            Event::RedrawRequested(_) => {
                unsafe {
                    gl::Clear(gl::COLOR_BUFFER_BIT);
                    gl::DrawElements(
                        gl::TRIANGLES,
                        INDICES.len() as i32,
                        gl::UNSIGNED_INT,
                        null(),
                    );
                }

                context.swap_buffers().unwrap();
            }
            _ => {}
        }

        // Keep the program alive for the lifetime of the loop.
        let _ = &program;
    })
}
