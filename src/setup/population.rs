//! Population Construction
//!
//! Builds the initial agent vector: uniform random positions and velocities,
//! cyclic skepticism tiers, and the first `kol_count` agents seeded as
//! believing opinion leaders.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::components::agent::{Agent, BeliefState, SkepticismTier};
use crate::components::population::Population;
use crate::components::world::{ARENA_HEIGHT, ARENA_WIDTH};
use crate::engine::SimError;

/// Build a fresh population of `total_count` agents with `kol_count` seed
/// believers.
///
/// Programmatic misuse (empty population, more leaders than agents) is
/// rejected rather than clamped.
pub fn build_population(
    total_count: usize,
    kol_count: usize,
    rng: &mut SmallRng,
) -> Result<Population, SimError> {
    if total_count == 0 {
        return Err(SimError::EmptyPopulation);
    }
    if kol_count > total_count {
        return Err(SimError::LeaderCountExceedsPopulation {
            requested: kol_count,
            total: total_count,
        });
    }

    let mut agents = Vec::with_capacity(total_count);
    for id in 0..total_count {
        let is_kol = id < kol_count;
        agents.push(Agent {
            id,
            x: rng.gen::<f32>() * ARENA_WIDTH,
            y: rng.gen::<f32>() * ARENA_HEIGHT,
            dx: (rng.gen::<f32>() - 0.5) * 2.0,
            dy: (rng.gen::<f32>() - 0.5) * 2.0,
            belief: if is_kol {
                BeliefState::Believer
            } else {
                BeliefState::Uninformed
            },
            skepticism: SkepticismTier::from_index(id),
            is_kol,
            belief_tick: if is_kol { Some(0) } else { None },
        });
    }

    Ok(Population::new(agents))
}
