//! Projectile trajectory animation without a window.
//!
//! - `trajectory`: closed-form kinematics
//! - `sim`: the frame loop and its state
//! - `surface`: drawing capabilities the loop needs, plus a recording surface
//! - `raster`, `scene`: disc, ground texture and border drawing
//! - `input`: launch parameters typed on the terminal
//! - `pacing`: delays between frames
//! - `config`: scene constants and settings

pub mod config;
pub mod error;
pub mod input;
pub mod pacing;
pub mod raster;
pub mod scene;
pub mod sim;
pub mod surface;
pub mod trajectory;

pub use config::{SceneConfig, Variant};
pub use error::InputError;
pub use pacing::{NoPacing, Pacer, Pacing, SleepPacer};
pub use sim::{Phase, SimState, Simulation, StopReason};
pub use surface::{Color, RenderSurface};
pub use trajectory::{LaunchParams, Position};

/// Logger setup shared by the binaries: `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
