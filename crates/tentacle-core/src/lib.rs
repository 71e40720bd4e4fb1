//! Procedural kinematics for cursor-following tentacles.
//!
//! Per tick: [`CursorTracker`] filters the pointer velocity, [`MotionPredictor`]
//! projects it forward, [`AnchorManager`] replaces stale anchors and every
//! [`Appendage`] relaxes its point chain toward the new shape. [`render::paint`]
//! then turns the chains into line and circle draw calls.

pub mod anchors;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod engine;
pub mod error;
pub mod kinematics;
pub mod predictor;
pub mod profile;
pub mod render;
pub mod sim;

pub use anchors::AnchorManager;
pub use config::*;
pub use cursor::CursorTracker;
pub use engine::{Command, Engine, Flow};
pub use error::ConfigError;
pub use kinematics::{Appendage, ChainParams};
pub use predictor::{MotionPredictor, Prediction};
pub use profile::{ProfileController, TickScheduler};
pub use render::{DrawSurface, Rgb};
pub use sim::{Simulation, TickInput, TickReport};
