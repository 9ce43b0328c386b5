//! Core data model: agents, the population snapshot, and arena/clock state.

pub mod agent;
pub mod population;
pub mod world;

pub use agent::{Agent, BeliefState, SkepticismTier};
pub use population::{BeliefCounts, Population};
pub use world::{
    SimClock, ARENA_HEIGHT, ARENA_WIDTH, BASE_BELIEF_CHANCE, INTERACTION_RADIUS, KOL_MULTIPLIER,
    MAX_SPEED, SPEED_BASELINE, TICK_INTERVAL_MS, VELOCITY_JITTER,
};
