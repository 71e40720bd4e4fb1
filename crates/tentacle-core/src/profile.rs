//! Refresh profile selection and the tick scheduler built on it.

use std::time::Duration;

use crate::config::{EffectTables, RefreshProfile};

#[derive(Clone, Debug)]
pub struct ProfileController {
    profile: RefreshProfile,
    table: [u64; 6],
}

impl ProfileController {
    pub fn new(profile: RefreshProfile, tables: &EffectTables) -> Self {
        Self {
            profile,
            table: tables.refresh_ms,
        }
    }

    #[inline]
    pub fn profile(&self) -> RefreshProfile {
        self.profile
    }

    /// Selects a profile. Returns `false` when it was already active.
    pub fn set_profile(&mut self, profile: RefreshProfile) -> bool {
        if self.profile == profile {
            return false;
        }
        self.profile = profile;
        log::info!("[profile] {} fps -> {} ms", profile, self.interval_ms());
        true
    }

    #[inline]
    pub fn interval_ms(&self) -> u64 {
        self.table[self.profile.index()]
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms())
    }
}

/// Turns host time into simulation ticks at the profile's cadence.
///
/// At most one tick fires per [`advance`](Self::advance) call; a late host
/// delays the next tick instead of replaying missed ones.
#[derive(Clone, Debug)]
pub struct TickScheduler {
    profile: ProfileController,
    since_tick: Duration,
}

impl TickScheduler {
    pub fn new(profile: ProfileController) -> Self {
        Self {
            profile,
            since_tick: Duration::ZERO,
        }
    }

    #[inline]
    pub fn profile(&self) -> &ProfileController {
        &self.profile
    }

    #[inline]
    pub fn profile_mut(&mut self) -> &mut ProfileController {
        &mut self.profile
    }

    /// Adds `elapsed` host time. Returns the time since the previous tick when
    /// a tick is due.
    pub fn advance(&mut self, elapsed: Duration) -> Option<Duration> {
        self.since_tick += elapsed;
        if self.since_tick < self.profile.interval() {
            return None;
        }
        Some(std::mem::take(&mut self.since_tick))
    }

    pub fn until_next(&self) -> Duration {
        self.profile.interval().saturating_sub(self.since_tick)
    }
}
