use glutin::event::{Event, VirtualKeyCode};
use glutin::event_loop::EventLoop;
use glutin::{PossiblyCurrent, WindowedContext};

use crate::core::camera::{Camera, CameraMovement};
use crate::core::input::Input;
use crate::core::timing::{FpsTracker, FrameClock};
use crate::core::window::{self, InitialWindowInfo};
use crate::renderer::error::RendererError;
use crate::renderer::texture::WrapMode;
use crate::renderer::Renderer;
use crate::scene::SceneState;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EngineInfo {
    pub window_info: InitialWindowInfo,
    pub page_texture_path: &'static str,
    pub brick_texture_path: &'static str,
}

pub struct EngineInit {
    pub event_loop: EventLoop<()>,
    pub engine: Engine,
}

impl EngineInit {
    /// Acquires the window, the GL context, and every scene resource.
    /// Fails fast: any error here aborts startup before the loop runs.
    pub fn new(info: EngineInfo, camera: Camera) -> Result<Self, RendererError> {
        let event_loop = EventLoop::new();
        let context = info.window_info.build(&event_loop)?;
        let gl = unsafe {
            glow::Context::from_loader_function(|name| context.get_proc_address(name) as *const _)
        };

        let renderer = Renderer::init(
            gl,
            info.window_info.initial_dimensions,
            info.page_texture_path,
            info.brick_texture_path,
        )?;
        let scene = SceneState::new(camera);

        Ok(Self {
            event_loop,
            engine: Engine {
                context,
                renderer,
                scene,
                input: Input::new(),
                clock: FrameClock::new(),
                fps_tracker: FpsTracker::new(),
            },
        })
    }

    pub fn start(self) -> ! {
        window::start(self)
    }
}

/// Field order is drop order: the renderer releases its GPU resources while
/// the context that created them is still alive.
pub struct Engine {
    renderer: Renderer,
    context: WindowedContext<PossiblyCurrent>,
    scene: SceneState,
    input: Input,
    clock: FrameClock,
    fps_tracker: FpsTracker,
}

impl Engine {
    pub(crate) fn on_start(&self) {
        window::capture_cursor(self.context.window());
    }

    pub(crate) fn handle_event(&mut self, event: &Event<()>) {
        self.input.update(event);
    }

    pub(crate) fn resize(&self, size: glutin::dpi::PhysicalSize<u32>) {
        self.context.resize(size);
        self.renderer.resize(size.width as i32, size.height as i32);
    }

    /// Runs one frame: timing, polled input, both render passes, present.
    /// Returns true when the frame requested shutdown.
    pub(crate) fn frame(&mut self) -> bool {
        let delta_time = self.clock.tick();
        if self.process_input(delta_time) {
            return true;
        }

        self.renderer.draw_frame(&self.scene);
        if let Err(e) = self.context.swap_buffers() {
            log::error!("Buffer swap failed: {}", e);
        }

        self.input.rollover_state();
        if self.fps_tracker.update() {
            log::debug!("FPS: {:.1}", self.fps_tracker.fps());
        }
        false
    }

    // polled per frame; continuous actions scale by delta_time, discrete
    // ones go through the scene state's change detection
    fn process_input(&mut self, delta_time: f32) -> bool {
        if self.input.key_down(VirtualKeyCode::Escape) {
            return true;
        }

        let movement = [
            (VirtualKeyCode::W, CameraMovement::Forward),
            (VirtualKeyCode::S, CameraMovement::Backward),
            (VirtualKeyCode::A, CameraMovement::Left),
            (VirtualKeyCode::D, CameraMovement::Right),
            (VirtualKeyCode::Q, CameraMovement::Up),
            (VirtualKeyCode::E, CameraMovement::Down),
        ];
        for &(key, direction) in movement.iter() {
            if self.input.key_down(key) {
                self.scene.camera.process_keyboard(direction, delta_time);
            }
        }

        let (dx, dy) = self.input.mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            self.scene.camera.process_mouse_movement(dx, dy);
        }
        let scroll = self.input.scroll_delta();
        if scroll != 0.0 {
            self.scene.camera.process_mouse_scroll(scroll);
        }

        let wrap_keys = [
            (VirtualKeyCode::Key1, WrapMode::Repeat),
            (VirtualKeyCode::Key2, WrapMode::MirroredRepeat),
            (VirtualKeyCode::Key3, WrapMode::ClampToEdge),
            (VirtualKeyCode::Key4, WrapMode::ClampToBorder),
        ];
        for &(key, mode) in wrap_keys.iter() {
            if self.input.key_down(key) && self.scene.request_wrap_mode(mode) {
                self.renderer.set_wrap_mode(mode);
                log::info!("Current texture wrapping mode: {}", mode.label());
            }
        }

        if self.input.key_down(VirtualKeyCode::RBracket) {
            self.scene.step_uv_scale(1.0);
            let scale = self.scene.uv_scale;
            log::info!("Current UV scale: ({:.1}, {:.1})", scale.x, scale.y);
        } else if self.input.key_down(VirtualKeyCode::LBracket) {
            self.scene.step_uv_scale(-1.0);
            let scale = self.scene.uv_scale;
            log::info!("Current UV scale: ({:.1}, {:.1})", scale.x, scale.y);
        }

        false
    }
}
