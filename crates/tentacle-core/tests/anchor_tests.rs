// Host-side tests for anchor detachment and resampling.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI};
use tentacle_core::anchors::{angle_between, sample_forward, AnchorManager};
use tentacle_core::cursor::CursorTracker;
use tentacle_core::predictor::{MotionPredictor, Prediction};

#[test]
fn angle_between_basic_directions() {
    let x = Vec2::new(1.0, 0.0);
    assert!((angle_between(x, Vec2::new(-3.0, 0.0)) - PI).abs() < 1e-2);
    assert!((angle_between(x, Vec2::new(0.0, 2.0)) - FRAC_PI_2).abs() < 1e-3);
    assert!(angle_between(x, Vec2::new(5.0, 0.0)) < 2e-2);
    assert!(angle_between(Vec2::ZERO, x).is_finite());
}

#[test]
fn detaches_when_out_of_reach() {
    let m = AnchorManager::with_anchors(vec![Vec2::ZERO], 350.0);
    assert!(m.should_detach(Vec2::ZERO, Vec2::ZERO, Vec2::new(351.0, 0.0)));
    assert!(!m.should_detach(Vec2::ZERO, Vec2::ZERO, Vec2::new(349.0, 0.0)));
    assert!(!m.should_detach(Vec2::ZERO, Vec2::ZERO, Vec2::new(350.0, 0.0)));
}

#[test]
fn detaches_when_anchor_falls_behind_fast_cursor() {
    let m = AnchorManager::with_anchors(vec![Vec2::ZERO], 350.0);
    let fast = Vec2::new(100.0, 0.0);
    let slow = Vec2::new(10.0, 0.0);
    let behind = Vec2::new(-10.0, 5.0);
    let ahead = Vec2::new(10.0, 5.0);

    assert!(m.should_detach(Vec2::ZERO, fast, behind));
    assert!(!m.should_detach(Vec2::ZERO, fast, ahead));
    // below the speed gate the heading is ignored
    assert!(!m.should_detach(Vec2::ZERO, slow, behind));
}

#[test]
fn resampled_anchor_stays_within_predicted_distance_and_cone() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let direction = Vec2::new(angle.cos(), angle.sin());
        let prediction = Prediction {
            point: Vec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)),
            distance: rng.gen_range(0.0..210.0),
            direction,
            speed: 100.0,
        };
        let anchor = sample_forward(&prediction, &mut rng);
        let offset = anchor - prediction.point;
        assert!(
            offset.length() <= prediction.distance + 1e-3,
            "anchor {} beyond {}",
            offset.length(),
            prediction.distance
        );
        if offset.length() > 1.0 {
            assert!(angle_between(direction, offset) <= FRAC_PI_3 + 1e-2);
        }
    }
}

#[test]
fn initial_scatter_is_within_grab_distance() {
    let mut rng = StdRng::seed_from_u64(11);
    let center = Vec2::new(400.0, 300.0);
    let m = AnchorManager::scattered(64, center, 300.0, 350.0, &mut rng);
    assert_eq!(m.len(), 64);
    for a in m.anchors() {
        assert!(a.distance(center) <= 300.0 + 1e-3);
    }
    // a full circle, not a cone: both sides of the centre get anchors
    assert!(m.anchors().iter().any(|a| a.x < center.x));
    assert!(m.anchors().iter().any(|a| a.x > center.x));
}

#[test]
fn detachment_fires_exactly_when_distance_is_exceeded() {
    // Cursor walks right at 10 px/s in 1 s ticks; velocity stays below the
    // angular gate, so only the distance rule can fire.
    let mut rng = StdRng::seed_from_u64(3);
    let mut tracker = CursorTracker::new(Vec2::ZERO, 0.0);
    let predictor = MotionPredictor::new(500.0, 210.0);
    let mut manager = AnchorManager::with_anchors(vec![Vec2::ZERO], 350.0);

    let mut fired_at = None;
    for tick in 1..=40u32 {
        let cursor = Vec2::new(10.0 * tick as f32, 0.0);
        tracker.update(cursor, 1.0);
        assert!(tracker.speed() < 15.0);
        let prediction = predictor.compute(cursor, tracker.velocity(), &mut rng);
        let replaced =
            manager.maybe_reassign(0, cursor, tracker.velocity(), &prediction, &mut rng);
        if replaced {
            fired_at = Some(tick);
            break;
        }
        assert_eq!(manager.anchor(0), Some(Vec2::ZERO), "anchor moved at tick {tick}");
    }
    assert_eq!(fired_at, Some(36));
    assert_ne!(manager.anchor(0), Some(Vec2::ZERO));
}

#[test]
fn out_of_range_index_is_ignored() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut m = AnchorManager::with_anchors(vec![Vec2::ZERO], 350.0);
    let prediction = Prediction {
        point: Vec2::ZERO,
        distance: 0.0,
        direction: Vec2::X,
        speed: 0.0,
    };
    assert!(!m.maybe_reassign(4, Vec2::new(1000.0, 0.0), Vec2::ZERO, &prediction, &mut rng));
    m.set_anchor(4, Vec2::ONE);
    assert_eq!(m.anchors(), &[Vec2::ZERO]);
}
