//! Arena Constants and Simulation Clock
//!
//! Arena dimensions and the interaction radius are fixed engine constants,
//! deliberately not exposed through configuration.

use bevy_ecs::prelude::*;

/// Arena width in arena-units
pub const ARENA_WIDTH: f32 = 780.0;

/// Arena height in arena-units
pub const ARENA_HEIGHT: f32 = 380.0;

/// Maximum distance at which a believer can reach an uninformed agent
pub const INTERACTION_RADIUS: f32 = 30.0;

/// Velocity magnitude cap, in arena-units per tick
pub const MAX_SPEED: f32 = 2.0;

/// Range of the uniform per-axis velocity perturbation applied each tick
pub const VELOCITY_JITTER: f32 = 0.2;

/// Speed setting at which displacement equals raw velocity
pub const SPEED_BASELINE: f32 = 50.0;

/// Base probability that an encounter converts an uninformed agent
pub const BASE_BELIEF_CHANCE: f32 = 0.3;

/// Influence multiplier applied when the spreading believer is an opinion leader
pub const KOL_MULTIPLIER: f32 = 3.0;

/// Nominal interval between ticks
pub const TICK_INTERVAL_MS: u64 = 50;

/// Logical simulation clock.
///
/// Time is derived from the tick count rather than wall-clock reads, so a
/// seeded run produces identical sample timestamps every time.
#[derive(Resource, Debug, Clone)]
pub struct SimClock {
    /// Number of completed ticks since initialization or the last reset
    pub current_tick: u64,
    /// Nominal milliseconds per tick
    pub tick_interval_ms: u64,
}

impl SimClock {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self {
            current_tick: 0,
            tick_interval_ms,
        }
    }

    /// Advance the clock by one tick
    pub fn advance(&mut self) {
        self.current_tick += 1;
    }

    /// Elapsed simulation time in seconds
    pub fn elapsed_secs(&self) -> f32 {
        (self.current_tick * self.tick_interval_ms) as f32 / 1000.0
    }

    /// Rewind to t=0 (used on reset)
    pub fn reset(&mut self) {
        self.current_tick = 0;
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(TICK_INTERVAL_MS)
    }
}
