//! Pointer sampling and the variable-timestep velocity filter.

use glam::Vec2;

use crate::constants::{
    VELOCITY_BLEND_MAX, VELOCITY_BLEND_PER_SEC, VELOCITY_IDLE_DECAY, VELOCITY_SNAP_EPSILON,
};

/// Last pointer sample plus a smoothed velocity estimate in units/sec.
#[derive(Clone, Debug)]
pub struct CursorTracker {
    position: Vec2,
    velocity: Vec2,
    moving: bool,
    movement_threshold: f32,
}

impl CursorTracker {
    pub fn new(start: Vec2, movement_threshold: f32) -> Self {
        Self {
            position: start,
            velocity: Vec2::ZERO,
            moving: false,
            movement_threshold: movement_threshold.max(0.0),
        }
    }

    /// Feeds one pointer sample taken `dt` seconds after the previous one.
    ///
    /// A non-positive `dt` keeps the previous velocity. While the pointer rests the
    /// estimate decays by a fixed factor per tick and snaps to zero once both
    /// components are negligible.
    pub fn update(&mut self, pointer: Vec2, dt: f32) {
        let delta = pointer - self.position;
        self.moving = delta.length() > self.movement_threshold;

        if dt > 0.0 && dt.is_finite() {
            let smooth_factor = blend_factor(dt);
            let instant = delta / dt;
            self.velocity = instant * (1.0 - smooth_factor) + self.velocity * smooth_factor;
        }

        if !self.moving {
            self.velocity *= VELOCITY_IDLE_DECAY;
            if self.velocity.x.abs() < VELOCITY_SNAP_EPSILON
                && self.velocity.y.abs() < VELOCITY_SNAP_EPSILON
            {
                self.velocity = Vec2::ZERO;
            }
        }

        self.position = pointer;
    }

    pub fn reset(&mut self, pointer: Vec2) {
        self.position = pointer;
        self.velocity = Vec2::ZERO;
        self.moving = false;
        log::trace!("[cursor] reset at ({:.1},{:.1})", pointer.x, pointer.y);
    }

    pub fn set_movement_threshold(&mut self, threshold: f32) {
        self.movement_threshold = threshold.max(0.0);
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.moving
    }
}

/// Weight given to the previous velocity; shorter ticks trust the instantaneous sample more.
#[inline]
pub fn blend_factor(dt: f32) -> f32 {
    (dt * VELOCITY_BLEND_PER_SEC).min(VELOCITY_BLEND_MAX)
}
