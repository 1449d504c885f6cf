use glutin::event::{ElementState, Event, MouseScrollDelta, VirtualKeyCode, WindowEvent};

#[derive(Debug, PartialEq, Copy, Clone)]
struct InputState {
    /// Stores whether a key is held down
    key_held: [bool; 255],
    /// Accumulated cursor movement since the last frame
    mouse_delta: (f32, f32),
    /// Accumulated scroll since the last frame
    scroll_delta: f32,
}

impl Default for InputState {
    fn default() -> Self {
        InputState {
            key_held: [false; 255],
            mouse_delta: (0., 0.),
            scroll_delta: 0.,
        }
    }
}

impl InputState {
    // rolling over to the next frame, deciding which values to keep and which not
    fn rollover(&mut self) {
        self.mouse_delta = (0., 0.);
        self.scroll_delta = 0.;
    }
}

pub struct Input {
    state: InputState,
    tracker: MouseTracker,
}

impl Input {
    pub(crate) fn new() -> Self {
        Self {
            state: InputState::default(),
            tracker: MouseTracker::new(),
        }
    }

    pub(crate) fn update(&mut self, event: &Event<()>) {
        if let Event::WindowEvent { event, .. } = event {
            match event {
                WindowEvent::KeyboardInput { input, .. } => {
                    if let Some(keycode) = input.virtual_keycode {
                        self.state.key_held[keycode as usize] =
                            input.state == ElementState::Pressed;
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let (dx, dy) = self.tracker.offset(position.x, position.y);
                    self.state.mouse_delta.0 += dx;
                    self.state.mouse_delta.1 += dy;
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    if let MouseScrollDelta::LineDelta(_, y) = delta {
                        self.state.scroll_delta += y;
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    let action = match state {
                        ElementState::Pressed => "pressed",
                        ElementState::Released => "released",
                    };
                    log::info!("{:?} mouse button {}", button, action);
                }
                _ => {}
            }
        }
    }

    // run this right after the frame work
    /// Rolls the input state over to the next frame
    pub(crate) fn rollover_state(&mut self) {
        self.state.rollover();
    }

    /// Returns whether the key is pressed down right now
    pub fn key_down(&self, key: VirtualKeyCode) -> bool {
        self.state.key_held[key as usize]
    }

    /// Returns the accumulated cursor delta for this frame
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.state.mouse_delta
    }

    /// Returns the accumulated scroll delta for this frame
    pub fn scroll_delta(&self) -> f32 {
        self.state.scroll_delta
    }
}

/// Turns absolute cursor positions into per-event deltas.
///
/// The first event after (re)start yields a zero delta, since no prior
/// position exists to subtract from; a stale position would otherwise cause
/// one large spurious camera jump.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MouseTracker {
    last: Option<(f64, f64)>,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Records a cursor position and returns the delta since the previous one.
    ///
    /// The y offset is reversed: window coordinates grow downward, camera
    /// pitch grows upward.
    pub fn offset(&mut self, x: f64, y: f64) -> (f32, f32) {
        let delta = match self.last {
            Some((last_x, last_y)) => ((x - last_x) as f32, (last_y - y) as f32),
            None => (0., 0.),
        };
        self.last = Some((x, y));
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::MouseTracker;

    #[test]
    fn first_offset_is_zero_for_any_position() {
        let mut tracker = MouseTracker::new();
        assert_eq!(tracker.offset(4213.7, -950.0), (0., 0.));

        let mut tracker = MouseTracker::new();
        assert_eq!(tracker.offset(0.0, 0.0), (0., 0.));
    }

    #[test]
    fn subsequent_offsets_track_movement() {
        let mut tracker = MouseTracker::new();
        tracker.offset(100.0, 100.0);
        assert_eq!(tracker.offset(103.0, 98.0), (3.0, 2.0));
        assert_eq!(tracker.offset(103.0, 98.0), (0.0, 0.0));
    }

    #[test]
    fn y_offset_is_reversed() {
        let mut tracker = MouseTracker::new();
        tracker.offset(0.0, 0.0);
        // cursor moved down the window -> negative pitch offset
        assert_eq!(tracker.offset(0.0, 10.0), (0.0, -10.0));
    }
}
