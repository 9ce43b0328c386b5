//! Rumor Diffusion Simulation Engine Library
//!
//! Agent-based model of rumor spread through a moving population, modulated
//! by per-agent skepticism tiers and a configurable set of opinion leaders.
//! The public surface is the [`Engine`]: build it from a [`Config`] and a
//! seed, drive it one tick at a time, and read the population snapshot and
//! diffusion history after each tick.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;

pub mod components;
pub mod config;
pub mod engine;
pub mod output;
pub mod params;
pub mod setup;
pub mod systems;

pub use components::*;
pub use config::Config;
pub use engine::{Engine, SimError};
pub use output::{DiffusionHistory, DiffusionSample, HISTORY_CAPACITY};
pub use params::SimParams;

/// Seeded random number generator resource
#[derive(Resource)]
pub struct SimRng(pub SmallRng);
