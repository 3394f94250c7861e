//! First scene: one static triangle, raw buffer calls, uniform orange fill.
//!
//! Everything here is spelled out on purpose. The buffer is created, bound
//! and filled by hand; later scenes fold these calls into wrappers.

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

pub fn run() -> ! {
    let (event_loop, context) = super::create_context("Hello, Friend", 720, 720);

    // Two floats per vertex, positions only.
    let vertices: [f32; 6] = [
        -0.5, -0.5,
         0.0,  0.7,
         0.5, -0.5,
    ];

    let mut vao = 0;
    unsafe {
        gl::GenVertexArrays(1, &mut vao);
        gl::BindVertexArray(vao);
    }

    let mut vbo = 0;
    unsafe {
        gl::GenBuffers(1, &mut vbo);
        gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
        gl::BufferData(
            gl::ARRAY_BUFFER,
            (vertices.len() * size_of::<f32>()) as GLsizeiptr,
            vertices.as_ptr() as *const c_void,
            gl::STATIC_DRAW,
        );

        // The first two floats of each vertex are the position argument.
        gl::EnableVertexAttribArray(0);
        gl::VertexAttribPointer(
            0,
            2,
            gl::FLOAT,
            gl::FALSE,
            (2 * size_of::<f32>()) as i32,
            null(),
        );
    }

    let program = match GlProgram::from_files(
        "res/shaders/vertex.shader",
        "res/shaders/fragment.shader",
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
                    gl::DrawArrays(gl::TRIANGLES, 0, 3);
                }

                context.swap_buffers().unwrap();
            }
            _ => {}
        }

        // program outlives the loop; dropping it would kill the draw calls.
        let _ = &program;
    })
}
