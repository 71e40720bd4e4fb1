//! Forward projection of the cursor. Anchors are sampled around where the cursor
//! is heading rather than where it is.

use glam::Vec2;
use rand::Rng;

use crate::constants::{DIRECTION_MIN_SPEED, HORIZON_SPEED_COEFF};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Prediction {
    /// Predicted cursor position; centre of anchor resampling.
    pub point: Vec2,
    /// Distance between the cursor and `point`; also the resampling radius.
    pub distance: f32,
    /// Unit heading. Random when the cursor is (nearly) still.
    pub direction: Vec2,
    pub speed: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct MotionPredictor {
    pub base_horizon_ms: f32,
    pub max_distance: f32,
}

impl MotionPredictor {
    pub fn new(base_horizon_ms: f32, max_distance: f32) -> Self {
        Self {
            base_horizon_ms,
            max_distance,
        }
    }

    /// Look-ahead window for the given speed; shrinks as the cursor speeds up.
    #[inline]
    pub fn effective_horizon_ms(&self, speed: f32) -> f32 {
        self.base_horizon_ms / (1.0 + speed * HORIZON_SPEED_COEFF)
    }

    #[inline]
    pub fn travel_distance(&self, speed: f32) -> f32 {
        (speed * self.effective_horizon_ms(speed) / 1000.0).min(self.max_distance)
    }

    pub fn compute<R: Rng + ?Sized>(
        &self,
        position: Vec2,
        velocity: Vec2,
        rng: &mut R,
    ) -> Prediction {
        let speed = velocity.length();
        let direction = heading(velocity, speed, rng);
        let distance = self.travel_distance(speed);
        Prediction {
            point: position + direction * distance,
            distance,
            direction,
            speed,
        }
    }
}

/// Normalised velocity, or a uniformly random unit vector when too slow to trust.
pub fn heading<R: Rng + ?Sized>(velocity: Vec2, speed: f32, rng: &mut R) -> Vec2 {
    if speed > DIRECTION_MIN_SPEED {
        velocity / speed
    } else {
        random_unit(rng)
    }
}

#[inline]
pub fn random_unit<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec2::new(angle.cos(), angle.sin())
}
