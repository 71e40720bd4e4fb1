// Screen-space pointer position for a click-through window.
//
// The OS cursor query wins whenever it answers. Without one, the position is
// estimated from window cursor events and raw device motion deltas, which do
// not include pointer acceleration and drift over time.

use glam::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct PointerSource {
    position: Vec2,
    window_origin: Vec2,
    bounds: Option<(Vec2, Vec2)>,
}

impl PointerSource {
    pub fn new(initial: Vec2) -> Self {
        Self {
            position: initial,
            window_origin: Vec2::ZERO,
            bounds: None,
        }
    }

    /// Screen position of the window's client area.
    pub fn set_window_origin(&mut self, origin: Vec2) {
        self.window_origin = origin;
    }

    /// Clamp region for relative motion (usually the monitor rectangle).
    pub fn set_bounds(&mut self, min: Vec2, max: Vec2) {
        self.bounds = Some((min, max));
        self.position = self.clamped(self.position);
    }

    /// Absolute sample relative to the window's client area.
    pub fn on_cursor_moved(&mut self, client: Vec2) {
        self.position = self.window_origin + client;
    }

    /// Raw relative motion from the pointing device.
    pub fn on_device_motion(&mut self, delta: Vec2) {
        if delta.is_finite() {
            self.position = self.clamped(self.position + delta);
        }
    }

    /// Picks this tick's position: the OS cursor when `system` has one,
    /// otherwise the running estimate.
    pub fn sample(&mut self, system: Option<Vec2>) -> Vec2 {
        if let Some(p) = system.filter(|p| p.is_finite()) {
            self.position = p;
        }
        self.position
    }

    pub fn window_origin(&self) -> Vec2 {
        self.window_origin
    }

    fn clamped(&self, p: Vec2) -> Vec2 {
        match self.bounds {
            Some((min, max)) => p.clamp(min, max),
            None => p,
        }
    }
}
