// Start-up configuration from environment variables. Bad values are logged and
// ignored so the overlay always starts.

use std::str::FromStr;

use tentacle_core::{
    parse_seed, parse_switch, ConfigError, GravityLevel, RefreshProfile, SimConfig, Style,
    WobbleLevel,
};

pub const ENV_PROFILE: &str = "TENTACLES_PROFILE";
pub const ENV_WOBBLE: &str = "TENTACLES_WOBBLE";
pub const ENV_GRAVITY: &str = "TENTACLES_GRAVITY";
pub const ENV_STYLE: &str = "TENTACLES_STYLE";
pub const ENV_IDLE_WOBBLE: &str = "TENTACLES_IDLE_WOBBLE";
pub const ENV_SEED: &str = "TENTACLES_SEED";

#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub config: SimConfig,
    pub profile: RefreshProfile,
    pub seed: Option<u64>,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key -> value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut s = Settings::default();
        if let Some(v) = read(&lookup, ENV_PROFILE, |v| RefreshProfile::from_str(v)) {
            s.profile = v;
        }
        if let Some(v) = read(&lookup, ENV_WOBBLE, |v| WobbleLevel::from_str(v)) {
            s.config.wobble = v;
        }
        if let Some(v) = read(&lookup, ENV_GRAVITY, |v| GravityLevel::from_str(v)) {
            s.config.gravity = v;
        }
        if let Some(v) = read(&lookup, ENV_STYLE, |v| Style::from_str(v)) {
            s.config.style = v;
        }
        if let Some(v) = read(&lookup, ENV_IDLE_WOBBLE, |v| parse_switch("idle wobble", v)) {
            s.config.wobble_while_idle = v;
        }
        s.seed = read(&lookup, ENV_SEED, parse_seed);
        s
    }
}

fn read<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    parse: impl Fn(&str) -> Result<T, ConfigError>,
) -> Option<T> {
    let raw = lookup(key)?;
    match parse(&raw) {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[config] ignoring {}: {}", key, e);
            None
        }
    }
}
