//! Closed configuration enumerations and the lookup tables that give them
//! numeric meaning.
//!
//! Each level is an index into an [`EffectTables`] array rather than a branch
//! in the simulation, so the mapping can be swapped or inspected on its own.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::ConfigError;
use crate::render::Rgb;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WobbleLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GravityLevel {
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

/// Thickness profile of a chain and whether it ends in a tip marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    #[default]
    Tapered,
    Uniform,
    TaperedWithTip,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RefreshProfile {
    Fps30,
    Fps60,
    Fps120,
    Fps144,
    #[default]
    Fps165,
    Fps240,
}

/// Amplitude (pixels) and temporal frequency (radians/sec) of the wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WobbleEffect {
    pub amplitude: f32,
    pub frequency: f32,
}

/// Linear taper: `thickness(t) = base * (1 - taper * t)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleEffect {
    pub base_thickness: f32,
    pub taper: f32,
    pub draw_tip: bool,
}

impl StyleEffect {
    /// Line thickness at position `t` in `[0, 1]` along the chain. Never increases with `t`.
    #[inline]
    pub fn thickness(&self, t: f32) -> f32 {
        self.base_thickness * (1.0 - t.clamp(0.0, 1.0) * self.taper)
    }
}

/// Enum -> effect lookup tables, indexed by the enum discriminant.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectTables {
    pub wobble: [WobbleEffect; 5],
    pub gravity: [f32; 5],
    pub style: [StyleEffect; 3],
    pub refresh_ms: [u64; 6],
}

impl Default for EffectTables {
    fn default() -> Self {
        const fn wobble(amplitude: f32, frequency: f32) -> WobbleEffect {
            WobbleEffect {
                amplitude,
                frequency,
            }
        }
        Self {
            wobble: [
                wobble(0.0, 0.0),
                wobble(5.0, 1.0),
                wobble(10.0, 2.0),
                wobble(15.0, 3.0),
                wobble(25.0, 4.0),
            ],
            gravity: [0.05, 0.10, 0.20, 0.30, 0.40],
            style: [
                StyleEffect {
                    base_thickness: 5.0,
                    taper: 0.7,
                    draw_tip: false,
                },
                StyleEffect {
                    base_thickness: 3.0,
                    taper: 0.0,
                    draw_tip: false,
                },
                StyleEffect {
                    base_thickness: 5.0,
                    taper: 0.8,
                    draw_tip: true,
                },
            ],
            refresh_ms: [33, 16, 8, 7, 6, 4],
        }
    }
}

impl EffectTables {
    #[inline]
    pub fn wobble(&self, level: WobbleLevel) -> WobbleEffect {
        self.wobble[level.index()]
    }

    #[inline]
    pub fn gravity(&self, level: GravityLevel) -> f32 {
        self.gravity[level.index()]
    }

    #[inline]
    pub fn style(&self, style: Style) -> StyleEffect {
        self.style[style.index()]
    }

    #[inline]
    pub fn refresh_ms(&self, profile: RefreshProfile) -> u64 {
        self.refresh_ms[profile.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub head: Rgb,
    pub tail: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            head: Rgb::from(HEAD_COLOR),
            tail: Rgb::from(TAIL_COLOR),
        }
    }
}

/// Everything the simulation and projector read. Changed only through commands.
#[derive(Clone, Debug)]
pub struct SimConfig {
    pub appendage_count: usize,
    /// Points per chain, head and tip included. Values below
    /// [`MIN_POINTS_PER_APPENDAGE`] are raised to it when the simulation is built.
    pub points_per_appendage: usize,
    pub max_grab_distance: f32,
    pub detach_distance: f32,
    pub prediction_horizon_ms: f32,
    pub smooth_speed: f32,
    /// Cursor displacement per tick above which the cursor counts as moving.
    pub movement_threshold: f32,
    pub wobble: WobbleLevel,
    pub wobble_while_idle: bool,
    pub gravity: GravityLevel,
    pub style: Style,
    pub palette: Palette,
    pub tables: EffectTables,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            appendage_count: APPENDAGE_COUNT,
            points_per_appendage: POINTS_PER_APPENDAGE,
            max_grab_distance: MAX_GRAB_DISTANCE,
            detach_distance: DETACH_DISTANCE,
            prediction_horizon_ms: PREDICTION_HORIZON_MS,
            smooth_speed: SMOOTH_SPEED,
            movement_threshold: 0.0,
            wobble: WobbleLevel::default(),
            wobble_while_idle: false,
            gravity: GravityLevel::default(),
            style: Style::default(),
            palette: Palette::default(),
            tables: EffectTables::default(),
        }
    }
}

impl SimConfig {
    #[inline]
    pub fn wobble_effect(&self) -> WobbleEffect {
        self.tables.wobble(self.wobble)
    }

    #[inline]
    pub fn gravity_coefficient(&self) -> f32 {
        self.tables.gravity(self.gravity)
    }

    #[inline]
    pub fn style_effect(&self) -> StyleEffect {
        self.tables.style(self.style)
    }

    /// Upper bound for predicted travel and replacement-anchor distance.
    #[inline]
    pub fn max_prediction_distance(&self) -> f32 {
        self.max_grab_distance * PREDICTION_CLAMP_FACTOR
    }
}

// Shared plumbing for the closed enums: ordering, cycling, index fallback and names.
macro_rules! closed_enum {
    (@first $first:literal $(, $rest:literal)*) => {
        $first
    };
    ($ty:ident, $kind:literal, [$($variant:ident => [$($name:literal),+]),+ $(,)?]) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            #[inline]
            pub fn index(self) -> usize {
                self as usize
            }

            /// Maps an index to a level; unmapped indices fall back to the default.
            pub fn from_index(index: usize) -> Self {
                Self::ALL.get(index).copied().unwrap_or_default()
            }

            pub fn next(self) -> Self {
                Self::ALL[(self.index() + 1) % Self::ALL.len()]
            }

            pub fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => closed_enum!(@first $($name),+)),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ConfigError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_ascii_lowercase().replace('_', "-");
                match needle.as_str() {
                    $($($name)|+ => Ok($ty::$variant),)+
                    _ => Err(ConfigError::UnknownValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

closed_enum!(WobbleLevel, "wobble", [
    None => ["none", "off"],
    Low => ["low"],
    Medium => ["medium"],
    High => ["high"],
    VeryHigh => ["very-high", "veryhigh"],
]);

closed_enum!(GravityLevel, "gravity", [
    VeryLow => ["very-low", "verylow"],
    Low => ["low"],
    Medium => ["medium"],
    High => ["high"],
    VeryHigh => ["very-high", "veryhigh"],
]);

closed_enum!(Style, "style", [
    Tapered => ["tapered"],
    Uniform => ["uniform"],
    TaperedWithTip => ["tapered-with-tip", "tip"],
]);

closed_enum!(RefreshProfile, "refresh profile", [
    Fps30 => ["30", "fps30"],
    Fps60 => ["60", "fps60"],
    Fps120 => ["120", "fps120"],
    Fps144 => ["144", "fps144"],
    Fps165 => ["165", "fps165"],
    Fps240 => ["240", "fps240"],
]);

/// Parses an on/off switch (`1`, `true`, `on`, `yes` and their negations).
pub fn parse_switch(kind: &'static str, s: &str) -> Result<bool, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::UnknownValue {
            kind,
            value: s.to_string(),
        }),
    }
}

/// Parses a decimal or `0x`-prefixed hexadecimal RNG seed.
pub fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    let trimmed = s.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|e| ConfigError::InvalidSeed {
        value: s.to_string(),
        reason: e.to_string(),
    })
}
