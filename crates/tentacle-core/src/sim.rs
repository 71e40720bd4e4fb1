//! The per-tick simulation step.
//!
//! All state lives in [`Simulation`]; the host feeds it one [`TickInput`] per
//! tick and reads the chains back for painting. Randomness comes from a seeded
//! generator, so identical seeds and inputs give identical anchors.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::anchors::AnchorManager;
use crate::config::SimConfig;
use crate::constants::MIN_POINTS_PER_APPENDAGE;
use crate::cursor::CursorTracker;
use crate::kinematics::{Appendage, ChainParams};
use crate::predictor::{MotionPredictor, Prediction};
use crate::render::{self, DrawSurface};

#[derive(Clone, Copy, Debug)]
pub struct TickInput {
    /// Pointer position in screen coordinates.
    pub pointer: Vec2,
    /// Seconds since the previous tick.
    pub dt: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct TickReport {
    pub prediction: Prediction,
    pub moving: bool,
    pub detached: usize,
}

pub struct Simulation {
    config: SimConfig,
    tracker: CursorTracker,
    predictor: MotionPredictor,
    anchors: AnchorManager,
    appendages: Vec<Appendage>,
    time: f64,
    rng: StdRng,
}

impl Simulation {
    /// Seeds every chain at `start` and scatters the anchors around it.
    pub fn new(mut config: SimConfig, start: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        if config.points_per_appendage < MIN_POINTS_PER_APPENDAGE {
            log::warn!(
                "[sim] points_per_appendage={} raised to {}",
                config.points_per_appendage,
                MIN_POINTS_PER_APPENDAGE
            );
            config.points_per_appendage = MIN_POINTS_PER_APPENDAGE;
        }
        let points = config.points_per_appendage;
        let anchors = AnchorManager::scattered(
            config.appendage_count,
            start,
            config.max_grab_distance,
            config.detach_distance,
            &mut rng,
        );
        let appendages = (0..config.appendage_count)
            .map(|i| Appendage::new(i, points, start))
            .collect();
        log::debug!(
            "[sim] {} appendages x {} points, seed={}",
            config.appendage_count,
            points,
            seed
        );
        Self {
            tracker: CursorTracker::new(start, config.movement_threshold),
            predictor: MotionPredictor::new(
                config.prediction_horizon_ms,
                config.max_prediction_distance(),
            ),
            anchors,
            appendages,
            time: 0.0,
            rng,
            config,
        }
    }

    /// Overrides anchors by index, e.g. to script a scenario. Extra entries are ignored.
    pub fn with_anchors(mut self, anchors: &[Vec2]) -> Self {
        for (i, anchor) in anchors.iter().enumerate() {
            self.anchors.set_anchor(i, *anchor);
        }
        self
    }

    /// Advances the simulation by one tick.
    ///
    /// Order: cursor tracking, prediction, anchor reassignment, then chain
    /// recomputation. The chains are stable for painting once this returns.
    pub fn tick(&mut self, input: TickInput) -> TickReport {
        if input.dt > 0.0 && input.dt.is_finite() {
            self.time += input.dt as f64;
        }

        self.tracker.update(input.pointer, input.dt);
        let cursor = self.tracker.position();
        let velocity = self.tracker.velocity();
        let prediction = self.predictor.compute(cursor, velocity, &mut self.rng);

        let mut detached = 0;
        for i in 0..self.anchors.len() {
            if self
                .anchors
                .maybe_reassign(i, cursor, velocity, &prediction, &mut self.rng)
            {
                detached += 1;
            }
        }

        let params = ChainParams {
            gravity: self.config.gravity_coefficient(),
            wobble: self.config.wobble_effect(),
            wobble_while_idle: self.config.wobble_while_idle,
            smooth_speed: self.config.smooth_speed,
            speed: prediction.speed,
            moving: self.tracker.is_moving(),
            time: self.time as f32,
        };
        for (appendage, anchor) in self.appendages.iter_mut().zip(self.anchors.anchors()) {
            appendage.recompute(cursor, *anchor, &params);
        }

        if detached > 0 {
            log::trace!("[sim] {} anchors reassigned", detached);
        }
        TickReport {
            prediction,
            moving: params.moving,
            detached,
        }
    }

    pub fn paint<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        render::paint(
            &self.appendages,
            &self.config.style_effect(),
            &self.config.palette,
            surface,
        );
    }

    /// Throws every anchor back into a disc around the cursor.
    pub fn scatter_anchors(&mut self) {
        let center = self.tracker.position();
        self.anchors
            .scatter(center, self.config.max_grab_distance, &mut self.rng);
        log::debug!("[anchor] scattered around ({:.1},{:.1})", center.x, center.y);
    }

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Mutable access for level and style changes. Counts are fixed at
    /// construction; distance changes are pushed to the owning components.
    pub fn update_config(&mut self, f: impl FnOnce(&mut SimConfig)) {
        let appendage_count = self.config.appendage_count;
        let points_per_appendage = self.config.points_per_appendage;
        f(&mut self.config);
        self.config.appendage_count = appendage_count;
        self.config.points_per_appendage = points_per_appendage;
        self.tracker
            .set_movement_threshold(self.config.movement_threshold);
        self.anchors.set_detach_distance(self.config.detach_distance);
        self.predictor = MotionPredictor::new(
            self.config.prediction_horizon_ms,
            self.config.max_prediction_distance(),
        );
    }

    #[inline]
    pub fn appendages(&self) -> &[Appendage] {
        &self.appendages
    }

    #[inline]
    pub fn anchors(&self) -> &[Vec2] {
        self.anchors.anchors()
    }

    #[inline]
    pub fn tracker(&self) -> &CursorTracker {
        &self.tracker
    }

    #[inline]
    pub fn time(&self) -> f64 {
        self.time
    }
}
