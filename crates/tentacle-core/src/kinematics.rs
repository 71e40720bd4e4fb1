//! Per-appendage point chains: interpolation toward the anchor, gravity sag,
//! perpendicular wave and temporal smoothing.

use glam::Vec2;

use crate::config::WobbleEffect;
use crate::constants::{
    DEGENERATE_SEGMENT_LENGTH, MIN_POINTS_PER_APPENDAGE, WAVE_SPATIAL_CYCLES, WAVE_SPEED_NORMALIZER,
};

#[derive(Clone, Copy, Debug)]
pub struct ChainParams {
    pub gravity: f32,
    pub wobble: WobbleEffect,
    pub wobble_while_idle: bool,
    pub smooth_speed: f32,
    pub speed: f32,
    pub moving: bool,
    /// Seconds since the simulation started.
    pub time: f32,
}

impl ChainParams {
    /// Wave amplitude before the along-chain envelope is applied.
    pub fn wave_amplitude(&self) -> f32 {
        if self.wobble_while_idle {
            return self.wobble.amplitude;
        }
        if !self.moving {
            return 0.0;
        }
        self.wobble.amplitude * (self.speed / WAVE_SPEED_NORMALIZER).min(1.0)
    }
}

/// One tentacle: a fixed-length chain of render positions.
#[derive(Clone, Debug)]
pub struct Appendage {
    index: usize,
    points: Vec<Vec2>,
}

impl Appendage {
    /// Chain of `count` points collapsed onto `start`, never fewer than
    /// [`MIN_POINTS_PER_APPENDAGE`].
    pub fn new(index: usize, count: usize, start: Vec2) -> Self {
        Self {
            index,
            points: vec![start; count.max(MIN_POINTS_PER_APPENDAGE)],
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn tip(&self) -> Vec2 {
        self.points[self.points.len() - 1]
    }

    /// Nudges every point toward its freshly computed target for this tick.
    ///
    /// When `start` and `end` (almost) coincide the points snap to the
    /// interpolated position instead, skipping wave and smoothing.
    pub fn recompute(&mut self, start: Vec2, end: Vec2, params: &ChainParams) {
        let last = (self.points.len() - 1) as f32;
        let span = end - start;
        let length = span.length();
        let phase = params.time * params.wobble.frequency + self.index as f32;
        let amplitude = params.wave_amplitude();

        for (j, point) in self.points.iter_mut().enumerate() {
            let t = j as f32 / last;
            let base = base_point(start, end, t, params.gravity);

            if length > DEGENERATE_SEGMENT_LENGTH {
                let normal = span.perp() / length;
                let offset = wave_offset(amplitude, phase, t);
                let target = base + normal * offset;
                *point = point.lerp(target, params.smooth_speed);
            } else {
                *point = base;
            }
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// `sin(t·π)`: zero at both ends, one at the middle.
#[inline]
pub fn envelope(t: f32) -> f32 {
    (t * std::f32::consts::PI).sin()
}

/// Downward (screen +Y) sag at `t`, proportional to the span length.
#[inline]
pub fn sag_offset(start: Vec2, end: Vec2, t: f32, gravity: f32) -> f32 {
    envelope(t) * gravity * start.distance(end)
}

#[inline]
pub fn base_point(start: Vec2, end: Vec2, t: f32, gravity: f32) -> Vec2 {
    let mut p = start.lerp(end, t);
    p.y += sag_offset(start, end, t, gravity);
    p
}

/// Signed perpendicular displacement at `t` for the given amplitude and phase.
#[inline]
pub fn wave_offset(amplitude: f32, phase: f32, t: f32) -> f32 {
    let spatial = t * WAVE_SPATIAL_CYCLES * std::f32::consts::TAU;
    amplitude * envelope(t) * (phase + spatial).sin()
}
