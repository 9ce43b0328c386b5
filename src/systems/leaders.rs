//! Opinion-Leader Allocator
//!
//! Maintains the set of high-influence agents under a live population.
//! Demotion revokes the flag only; promotion implies belief, so an
//! uninformed promotee is forced to `Believer` with a fresh acquisition
//! tick. Runs synchronously between ticks, never inside the tick schedule.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::components::agent::BeliefState;
use crate::components::population::Population;

/// Adjust the leader set so that exactly `min(target, len)` agents carry the
/// flag. Surplus leaders and promotion candidates are drawn uniformly at
/// random without replacement. Returns the resulting leader count.
pub fn set_leader_count(
    population: &mut Population,
    target: usize,
    rng: &mut SmallRng,
    current_tick: u64,
) -> usize {
    let target = target.min(population.len());
    let current = population.leader_count();

    if target < current {
        let mut leaders = population.leader_indices();
        leaders.shuffle(rng);
        for &id in leaders.iter().take(current - target) {
            population.agents_mut()[id].is_kol = false;
        }
        tracing::debug!(demoted = current - target, target, "reduced leader set");
    } else if target > current {
        let mut candidates: Vec<usize> = population
            .agents()
            .iter()
            .filter(|a| !a.is_kol)
            .map(|a| a.id)
            .collect();
        candidates.shuffle(rng);
        for &id in candidates.iter().take(target - current) {
            let agent = &mut population.agents_mut()[id];
            agent.is_kol = true;
            if agent.belief == BeliefState::Uninformed {
                agent.believe(current_tick);
            }
        }
        tracing::debug!(promoted = target - current, target, "expanded leader set");
    }

    population.leader_count()
}
