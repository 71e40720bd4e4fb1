//! Single entry point for the host: commands in, ticks out.

use std::time::Duration;

use glam::Vec2;

use crate::config::{RefreshProfile, SimConfig};
use crate::profile::{ProfileController, TickScheduler};
use crate::render::DrawSurface;
use crate::sim::{Simulation, TickInput, TickReport};

/// Discrete host commands. None of them touch the point chains directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    SetProfile(RefreshProfile),
    CycleWobble,
    CycleGravity,
    CycleStyle,
    ToggleIdleWobble,
    Scatter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Engine {
    sim: Simulation,
    scheduler: TickScheduler,
    last_report: Option<TickReport>,
}

impl Engine {
    pub fn new(config: SimConfig, profile: RefreshProfile, start: Vec2, seed: u64) -> Self {
        let scheduler = TickScheduler::new(ProfileController::new(profile, &config.tables));
        Self {
            sim: Simulation::new(config, start, seed),
            scheduler,
            last_report: None,
        }
    }

    /// Feeds host time and the latest pointer sample. Returns `true` when a tick
    /// ran and the surface needs repainting.
    pub fn advance(&mut self, elapsed: Duration, pointer: Vec2) -> bool {
        let Some(dt) = self.scheduler.advance(elapsed) else {
            return false;
        };
        let report = self.sim.tick(TickInput {
            pointer,
            dt: dt.as_secs_f32(),
        });
        self.last_report = Some(report);
        true
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Exit => return Flow::Exit,
            Command::SetProfile(profile) => {
                self.scheduler.profile_mut().set_profile(profile);
            }
            Command::CycleWobble => self.sim.update_config(|c| {
                c.wobble = c.wobble.next();
                log::info!("[config] wobble={}", c.wobble);
            }),
            Command::CycleGravity => self.sim.update_config(|c| {
                c.gravity = c.gravity.next();
                log::info!("[config] gravity={}", c.gravity);
            }),
            Command::CycleStyle => self.sim.update_config(|c| {
                c.style = c.style.next();
                log::info!("[config] style={}", c.style);
            }),
            Command::ToggleIdleWobble => self.sim.update_config(|c| {
                c.wobble_while_idle = !c.wobble_while_idle;
                log::info!("[config] wobble_while_idle={}", c.wobble_while_idle);
            }),
            Command::Scatter => self.sim.scatter_anchors(),
        }
        Flow::Continue
    }

    pub fn paint<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        self.sim.paint(surface);
    }

    #[inline]
    pub fn until_next_tick(&self) -> Duration {
        self.scheduler.until_next()
    }

    #[inline]
    pub fn profile(&self) -> RefreshProfile {
        self.scheduler.profile().profile()
    }

    #[inline]
    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    #[inline]
    pub fn last_report(&self) -> Option<&TickReport> {
        self.last_report.as_ref()
    }
}
