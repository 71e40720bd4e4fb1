//! Anchor ownership: when to let go of a target and where to grab next.

use glam::Vec2;
use rand::Rng;

use crate::constants::{ANCHOR_CONE_HALF_ANGLE, ANGLE_EPSILON, ANGULAR_DETACH_MIN_SPEED};
use crate::predictor::{random_unit, Prediction};

#[derive(Clone, Debug)]
pub struct AnchorManager {
    anchors: Vec<Vec2>,
    detach_distance: f32,
}

impl AnchorManager {
    /// Scatters `count` anchors around `center` at a uniform angle and a
    /// uniform distance up to `radius`.
    pub fn scattered<R: Rng + ?Sized>(
        count: usize,
        center: Vec2,
        radius: f32,
        detach_distance: f32,
        rng: &mut R,
    ) -> Self {
        let anchors = (0..count)
            .map(|_| scatter_point(center, radius, rng))
            .collect();
        Self {
            anchors,
            detach_distance,
        }
    }

    pub fn with_anchors(anchors: Vec<Vec2>, detach_distance: f32) -> Self {
        Self {
            anchors,
            detach_distance,
        }
    }

    #[inline]
    pub fn anchors(&self) -> &[Vec2] {
        &self.anchors
    }

    #[inline]
    pub fn anchor(&self, index: usize) -> Option<Vec2> {
        self.anchors.get(index).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Overwrites one anchor. Out-of-range indices are ignored.
    pub fn set_anchor(&mut self, index: usize, anchor: Vec2) {
        if let Some(slot) = self.anchors.get_mut(index) {
            *slot = anchor;
        }
    }

    pub fn set_detach_distance(&mut self, distance: f32) {
        self.detach_distance = distance;
    }

    /// True when the anchor is out of reach, or lies behind the direction of travel
    /// while the cursor moves fast enough for the heading to be meaningful.
    pub fn should_detach(&self, cursor: Vec2, velocity: Vec2, anchor: Vec2) -> bool {
        if cursor.distance(anchor) > self.detach_distance {
            return true;
        }
        velocity.length() > ANGULAR_DETACH_MIN_SPEED
            && angle_between(velocity, anchor - cursor) > std::f32::consts::FRAC_PI_2
    }

    /// Replaces anchor `index` if it should detach. Returns whether it was replaced.
    pub fn maybe_reassign<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        cursor: Vec2,
        velocity: Vec2,
        prediction: &Prediction,
        rng: &mut R,
    ) -> bool {
        let Some(anchor) = self.anchor(index) else {
            return false;
        };
        if !self.should_detach(cursor, velocity, anchor) {
            return false;
        }
        let next = sample_forward(prediction, rng);
        log::trace!(
            "[anchor] {} detached ({:.1},{:.1}) -> ({:.1},{:.1})",
            index,
            anchor.x,
            anchor.y,
            next.x,
            next.y
        );
        self.anchors[index] = next;
        true
    }

    pub fn scatter<R: Rng + ?Sized>(&mut self, center: Vec2, radius: f32, rng: &mut R) {
        for anchor in &mut self.anchors {
            *anchor = scatter_point(center, radius, rng);
        }
    }
}

/// Angle in radians between two vectors. A zero vector yields a right angle.
#[inline]
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let cos = a.dot(b) / (a.length() * b.length() + ANGLE_EPSILON);
    cos.clamp(-1.0, 1.0).acos()
}

/// Random point in the forward cone of `prediction`, no further than its distance.
pub fn sample_forward<R: Rng + ?Sized>(prediction: &Prediction, rng: &mut R) -> Vec2 {
    let base_angle = prediction.direction.y.atan2(prediction.direction.x);
    let angle = base_angle + rng.gen_range(-ANCHOR_CONE_HALF_ANGLE..ANCHOR_CONE_HALF_ANGLE);
    let dist = rng.gen::<f32>() * prediction.distance;
    prediction.point + Vec2::new(angle.cos(), angle.sin()) * dist
}

fn scatter_point<R: Rng + ?Sized>(center: Vec2, radius: f32, rng: &mut R) -> Vec2 {
    center + random_unit(rng) * (rng.gen::<f32>() * radius)
}
