use glutin::event::{Event, WindowEvent};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};

use crate::engine::EngineInit;
use crate::renderer::error::RendererError;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InitialWindowInfo {
    pub initial_dimensions: Dimensions,
    pub title: &'static str,
}

impl InitialWindowInfo {
    /// Creates the window together with a current OpenGL 4.4 core context.
    pub(crate) fn build(
        self,
        event_loop: &EventLoop<()>,
    ) -> Result<WindowedContext<PossiblyCurrent>, RendererError> {
        let window_builder = WindowBuilder::new()
            .with_title(self.title)
            .with_inner_size(glutin::dpi::LogicalSize::new(
                f64::from(self.initial_dimensions.width),
                f64::from(self.initial_dimensions.height),
            ))
            .with_min_inner_size(glutin::dpi::LogicalSize::new(64, 64));

        let context = ContextBuilder::new()
            .with_gl(GlRequest::Specific(Api::OpenGl, (4, 4)))
            .with_gl_profile(GlProfile::Core)
            .with_vsync(true)
            .build_windowed(window_builder, event_loop)?;

        let context = unsafe { context.make_current().map_err(|(_, e)| e)? };
        Ok(context)
    }
}

/// Hides the cursor and grabs it for camera look.
pub(crate) fn capture_cursor(window: &glutin::window::Window) {
    window.set_cursor_visible(false);
    if let Err(e) = window.set_cursor_grab(true) {
        log::warn!("Could not enable cursor grab: {}", e);
    }
}

pub fn start(engine_init: EngineInit) -> ! {
    let EngineInit {
        event_loop,
        mut engine,
    } = engine_init;
    engine.on_start();
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;
        engine.handle_event(&event);
        match event {
            // close
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => *control_flow = ControlFlow::Exit,
            // resize
            Event::WindowEvent {
                event: WindowEvent::Resized(size),
                ..
            } => {
                engine.resize(size);
            }
            // render
            Event::MainEventsCleared => {
                if engine.frame() {
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}
