// Host-side tests for the tick scheduler, refresh profiles and command handling.

use glam::Vec2;
use std::time::Duration;
use tentacle_core::config::{EffectTables, RefreshProfile, SimConfig, Style, WobbleLevel};
use tentacle_core::{Command, Engine, Flow, ProfileController, TickScheduler};

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn profiles_map_to_intervals() {
    let tables = EffectTables::default();
    let mut pc = ProfileController::new(RefreshProfile::Fps60, &tables);
    assert_eq!(pc.interval(), ms(16));
    assert!(pc.set_profile(RefreshProfile::Fps240));
    assert_eq!(pc.interval_ms(), 4);
    assert!(!pc.set_profile(RefreshProfile::Fps240));
}

#[test]
fn scheduler_fires_once_interval_has_elapsed() {
    let tables = EffectTables::default();
    let mut s = TickScheduler::new(ProfileController::new(RefreshProfile::Fps60, &tables));
    assert_eq!(s.advance(ms(10)), None);
    assert_eq!(s.until_next(), ms(6));
    assert_eq!(s.advance(ms(10)), Some(ms(20)));
    assert_eq!(s.advance(ms(15)), None);
    assert_eq!(s.advance(ms(1)), Some(ms(16)));
}

#[test]
fn late_host_delays_instead_of_bursting() {
    let tables = EffectTables::default();
    let mut s = TickScheduler::new(ProfileController::new(RefreshProfile::Fps120, &tables));
    assert_eq!(s.advance(ms(100)), Some(ms(100)));
    assert_eq!(s.advance(ms(1)), None);
}

#[test]
fn profile_change_applies_to_the_next_advance() {
    let tables = EffectTables::default();
    let mut s = TickScheduler::new(ProfileController::new(RefreshProfile::Fps240, &tables));
    assert_eq!(s.advance(ms(3)), None);
    s.profile_mut().set_profile(RefreshProfile::Fps30);
    assert_eq!(s.advance(ms(3)), None);
    assert_eq!(s.advance(ms(26)), None);
    assert_eq!(s.advance(ms(3)), Some(ms(35)));
}

#[test]
fn engine_ticks_only_when_due() {
    let mut e = Engine::new(SimConfig::default(), RefreshProfile::Fps60, Vec2::ZERO, 1);
    assert!(!e.advance(ms(5), Vec2::ZERO));
    assert!(e.last_report().is_none());
    assert!(e.advance(ms(11), Vec2::new(3.0, 0.0)));
    let report = e.last_report().expect("tick ran");
    assert!(report.moving);
}

#[test]
fn commands_update_configuration_and_profile() {
    let mut e = Engine::new(SimConfig::default(), RefreshProfile::Fps165, Vec2::ZERO, 1);

    assert_eq!(e.apply(Command::SetProfile(RefreshProfile::Fps30)), Flow::Continue);
    assert_eq!(e.profile(), RefreshProfile::Fps30);

    e.apply(Command::CycleWobble);
    assert_eq!(e.simulation().config().wobble, WobbleLevel::Low);
    e.apply(Command::CycleStyle);
    assert_eq!(e.simulation().config().style, Style::Uniform);
    e.apply(Command::ToggleIdleWobble);
    assert!(e.simulation().config().wobble_while_idle);
    e.apply(Command::CycleGravity);
    assert!((e.simulation().config().gravity_coefficient() - 0.30).abs() < 1e-6);

    assert_eq!(e.apply(Command::Exit), Flow::Exit);
}

#[test]
fn commands_leave_point_chains_alone() {
    let mut e = Engine::new(SimConfig::default(), RefreshProfile::Fps165, Vec2::ZERO, 8);
    e.advance(ms(6), Vec2::new(20.0, 0.0));
    let before: Vec<Vec2> = e.simulation().appendages()[0].points().to_vec();

    e.apply(Command::CycleWobble);
    e.apply(Command::Scatter);
    e.apply(Command::SetProfile(RefreshProfile::Fps60));

    assert_eq!(e.simulation().appendages()[0].points(), before.as_slice());
}

#[test]
fn scatter_keeps_anchors_within_grab_distance() {
    let mut e = Engine::new(SimConfig::default(), RefreshProfile::Fps165, Vec2::ZERO, 8);
    e.advance(ms(6), Vec2::new(50.0, 50.0));
    let before = e.simulation().anchors().to_vec();
    e.apply(Command::Scatter);
    let after = e.simulation().anchors();
    assert_ne!(before.as_slice(), after);
    for a in after {
        assert!(a.distance(Vec2::new(50.0, 50.0)) <= 300.0 + 1e-3);
    }
}
