//! Motion Update System
//!
//! Per-tick position and velocity integration with billiard-style boundary
//! reflection. Each agent is updated independently of the others, in index
//! order; the result does not depend on that order.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::components::agent::Agent;
use crate::components::population::Population;
use crate::components::world::{
    ARENA_HEIGHT, ARENA_WIDTH, MAX_SPEED, SPEED_BASELINE, VELOCITY_JITTER,
};
use crate::params::SimParams;
use crate::SimRng;

/// Advance every agent by one motion step and publish the new snapshot
pub fn update_motion(
    mut population: ResMut<Population>,
    params: Res<SimParams>,
    mut rng: ResMut<SimRng>,
) {
    let scale = params.speed() / SPEED_BASELINE;
    let mut next = population.agents().to_vec();

    for agent in &mut next {
        let jitter = (
            (rng.0.gen::<f32>() - 0.5) * VELOCITY_JITTER,
            (rng.0.gen::<f32>() - 0.5) * VELOCITY_JITTER,
        );
        step_agent(agent, jitter, scale);
    }

    population.replace(next);
}

/// One motion step for a single agent: jitter, speed cap, displacement,
/// reflection.
pub(crate) fn step_agent(agent: &mut Agent, jitter: (f32, f32), scale: f32) {
    agent.dx += jitter.0;
    agent.dy += jitter.1;

    // Proportional scaling keeps the heading while capping the magnitude
    let velocity = (agent.dx * agent.dx + agent.dy * agent.dy).sqrt();
    if velocity > MAX_SPEED {
        agent.dx = agent.dx / velocity * MAX_SPEED;
        agent.dy = agent.dy / velocity * MAX_SPEED;
    }

    agent.x += agent.dx * scale;
    agent.y += agent.dy * scale;

    // Reflect off each axis independently; coordinates never leave the arena
    if agent.x <= 0.0 || agent.x >= ARENA_WIDTH {
        agent.dx = -agent.dx;
        agent.x = agent.x.clamp(0.0, ARENA_WIDTH);
    }
    if agent.y <= 0.0 || agent.y >= ARENA_HEIGHT {
        agent.dy = -agent.dy;
        agent.y = agent.y.clamp(0.0, ARENA_HEIGHT);
    }
}
