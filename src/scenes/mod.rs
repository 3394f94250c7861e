//! The tutorial scenes, in learning order.
//!
//! Each scene is a self-contained setup + frame loop: open a window, upload
//! one static mesh, build one shader pair, draw it every frame until the
//! window closes. Only the window/context plumbing is shared; the point of
//! the sequence is to watch the raw calls of the early scenes get folded
//! into the wrappers of the last one.

pub mod abstraction;
pub mod polygon;
pub mod triangle;

use std::process;

use glutin::dpi::LogicalSize;
use glutin::event_loop::EventLoop;
use glutin::window::WindowBuilder;
use glutin::{ContextBuilder, PossiblyCurrent, WindowedContext};

use log::{error, info, warn};

use crate::graphics;

/// One tutorial step.
pub struct Scene {
    pub name: &'static str,
    pub summary: &'static str,
    pub run: fn() -> !,
}

lazy_static! {
    /// Registry of scenes, in the order they are meant to be read.
    pub static ref SCENES: Vec<Scene> = vec![
        Scene {
            name: "triangle",
            summary: "a static triangle drawn from a raw vertex buffer",
            run: triangle::run,
        },
        Scene {
            name: "polygon",
            summary: "a vertex-colored hexagon drawn with an index buffer",
            run: polygon::run,
        },
        Scene {
            name: "abstraction",
            summary: "the hexagon again, through the buffer wrappers and gl_call!",
            run: abstraction::run,
        },
    ];
}

pub fn find(name: &str) -> Option<&'static Scene> {
    SCENES.iter().find(|scene| scene.name == name)
}

/// Opens a fixed-size window with a current OpenGL context and loads the
/// driver's symbols. Window or context failure is fatal; a suspect symbol
/// load is only reported, and execution continues.
pub fn create_context(
    title: &str,
    width: u32,
    height: u32,
) -> (EventLoop<()>, WindowedContext<PossiblyCurrent>) {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(LogicalSize::new(width as f64, height as f64))
        .with_resizable(false);

    let context = match ContextBuilder::new().build_windowed(window, &event_loop) {
        Ok(context) => context,
        Err(e) => {
            error!("window creation failed: {}", e);
            process::exit(-1);
        }
    };

    let context = match unsafe { context.make_current() } {
        Ok(context) => context,
        Err((_, e)) => {
            error!("could not make the context current: {}", e);
            process::exit(-1);
        }
    };

    gl::load_with(|symbol| context.get_proc_address(symbol) as *const std::ffi::c_void);

    // The loader reports no failure itself, so probe one required symbol and
    // the version string instead.
    if !gl::GenBuffers::is_loaded() {
        warn!("symbol loading looks incomplete; draw calls may misbehave");
    }
    match graphics::driver_version() {
        Some(version) => info!("OpenGL version: {}", version),
        None => warn!("driver returned no version string"),
    }

    (event_loop, context)
}

#[cfg(test)]
mod test {
    use super::{find, SCENES};

    #[test]
    fn registry_names_are_unique() {
        for (i, a) in SCENES.iter().enumerate() {
            for b in SCENES.iter().skip(i + 1) {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn registry_names_are_flag_friendly() {
        for scene in SCENES.iter() {
            assert!(!scene.name.is_empty());
            assert!(scene.name.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
            assert!(!scene.summary.is_empty());
        }
    }

    #[test]
    fn lookup_finds_every_registered_scene() {
        for scene in SCENES.iter() {
            assert!(find(scene.name).is_some());
        }

        assert!(find("no-such-scene").is_none());
    }
}
