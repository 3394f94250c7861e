//! Last scene: the hexagon from `polygon`, drawn through the wrappers.
//!
//! The raw Gen/Bind/BufferData sequences of the earlier scenes become
//! [`GlVertexBuffer`] and [`GlElementBuffer`] values that own their handles,
//! binds go through an explicit [`GlState`], and every remaining raw call on
//! the draw path runs under `gl_call!`.

use std::ffi::c_void;
use std::mem::size_of;
use std::process;
use std::ptr::null;

use gl;

use glutin::event::{Event, WindowEvent};
use glutin::event_loop::ControlFlow;

use log::{error, info};

use crate::gl_call;
use crate::graphics::buffers::{GlElementBuffer, GlVertexBuffer};
use crate::graphics::shaders::GlProgram;
use crate::graphics::state::GlState;

// Same mesh as the polygon scene: interleaved [x, y, r, g, b].
const VERTICES: [f32; 35] = [
     0.0,   0.0,    1.0, 1.0, 1.0,
     0.8,   0.0,    1.0, 0.2, 0.2,
     0.4,   0.69,   1.0, 0.8, 0.2,
    -0.4,   0.69,   0.2, 1.0, 0.2,
    -0.8,   0.0,    0.2, 1.0, 0.8,
    -0.4,  -0.69,   0.2, 0.2, 1.0,
     0.4,  -0.69,   0.8, 0.2, 1.0,
];

const INDICES: [u32; 18] = [
    0, 1, 2,
    0, 2, 3,
    0, 3, 4,
    0, 4, 5,
    0, 5, 6,
    0, 6, 1,
];

pub fn run() -> ! {
    let (event_loop, context) = super::create_context("Hello, Wrappers", 1000, 1000);

    let mut state = GlState::new();

    let mut vao = 0;
    gl_call!(gl::GenVertexArrays(1, &mut vao));
    gl_call!(gl::BindVertexArray(vao));

    let vbo = GlVertexBuffer::new(&VERTICES, &mut state);
    vbo.bind(&mut state);

    let stride = (5 * size_of::<f32>()) as i32;
    gl_call!(gl::EnableVertexAttribArray(0));
    gl_call!(gl::VertexAttribPointer(0, 2, gl::FLOAT, gl::FALSE, stride, null()));
    gl_call!(gl::EnableVertexAttribArray(1));
    gl_call!(gl::VertexAttribPointer(
        1,
        3,
        gl::FLOAT,
        gl::FALSE,
        stride,
        (2 * size_of::<f32>()) as *const c_void,
    ));

    // The VAO has recorded the attribute pointers, so the vertex buffer no
    // longer needs to stay bound. The element buffer does, for DrawElements.
    GlVertexBuffer::unbind(&mut state);

    let ebo = GlElementBuffer::new(&INDICES, &mut state);
    ebo.bind(&mut state);

    info!(
        "mesh uploaded: vertex buffer {}, element buffer {} ({} indices)",
        vbo.id(),
        ebo.id(),
        ebo.count(),
    );

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

    program.set_used(&mut state);

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
                gl_call!(gl::Clear(gl::COLOR_BUFFER_BIT));
                gl_call!(gl::DrawElements(
                    gl::TRIANGLES,
                    ebo.count(),
                    gl::UNSIGNED_INT,
                    null(),
                ));

                context.swap_buffers().unwrap();
            }
            _ => {}
        }

        // The buffers and program must outlive the loop; their handles die
        // with them.
        let _ = (&vbo, &program, &state);
    })
}
