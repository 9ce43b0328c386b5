//! Belief Propagation System
//!
//! Pairwise proximity check and stochastic state transition. Sources are the
//! agents that were believers when the phase began; targets are the agents
//! that were uninformed. Pairs are evaluated source-major, target-minor, in
//! agent-index order, and a later qualifying pair overwrites the outcome of
//! an earlier one for the same target (last-write-wins). That ordering is
//! part of the reproducibility contract and must not be reordered.
//!
//! Targets converted mid-phase never act as sources within the same tick,
//! and believers/disbelievers are terminal with respect to propagation.

use bevy_ecs::prelude::*;
use rand::Rng;

use crate::components::agent::{BeliefState, SkepticismTier};
use crate::components::population::Population;
use crate::components::world::{BASE_BELIEF_CHANCE, INTERACTION_RADIUS, KOL_MULTIPLIER, SimClock};
use crate::params::SimParams;
use crate::SimRng;

/// Run one propagation phase over the post-motion population snapshot
pub fn propagate_belief(
    mut population: ResMut<Population>,
    params: Res<SimParams>,
    clock: Res<SimClock>,
    mut rng: ResMut<SimRng>,
) {
    let snapshot = population.agents();

    let sources: Vec<usize> = snapshot
        .iter()
        .filter(|a| a.belief == BeliefState::Believer)
        .map(|a| a.id)
        .collect();
    let targets: Vec<usize> = snapshot
        .iter()
        .filter(|a| a.belief == BeliefState::Uninformed)
        .map(|a| a.id)
        .collect();

    let mut next = snapshot.to_vec();

    for &source_id in &sources {
        let source = &snapshot[source_id];
        for &target_id in &targets {
            let target = &snapshot[target_id];
            if source.distance_to(target) >= INTERACTION_RADIUS {
                continue;
            }

            let chance = acceptance_chance(target.skepticism, source.is_kol, &params);
            // Draws land in [0, 1), so a chance above 1.0 converts with
            // certainty; no explicit clamp is needed.
            if rng.0.gen::<f32>() < chance {
                next[target_id].believe(clock.current_tick);
            } else {
                next[target_id].reject();
            }
        }
    }

    population.replace(next);
}

/// Acceptance probability for one encounter: base chance scaled by the
/// target's tier effect, tripled when the source is an opinion leader.
pub fn acceptance_chance(tier: SkepticismTier, source_is_kol: bool, params: &SimParams) -> f32 {
    let kol_factor = if source_is_kol { KOL_MULTIPLIER } else { 1.0 };
    BASE_BELIEF_CHANCE * params.tier_effect(tier) * kol_factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::agent::Agent;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn agent(id: usize, x: f32, belief: BeliefState, tier: SkepticismTier, is_kol: bool) -> Agent {
        Agent {
            id,
            x,
            y: 100.0,
            dx: 0.0,
            dy: 0.0,
            belief,
            skepticism: tier,
            is_kol,
            belief_tick: if belief == BeliefState::Believer {
                Some(0)
            } else {
                None
            },
        }
    }

    fn run_propagation(population: Population, params: SimParams, seed: u64) -> Population {
        let mut world = World::new();
        world.insert_resource(population);
        world.insert_resource(params);
        world.insert_resource(SimClock::default());
        world.insert_resource(SimRng(SmallRng::seed_from_u64(seed)));

        let mut schedule = Schedule::default();
        schedule.add_systems(propagate_belief);
        schedule.run(&mut world);

        world.remove_resource::<Population>().unwrap()
    }

    #[test]
    fn test_acceptance_chance_values() {
        let params = SimParams::new(50.0, 0.1, 1.0, 3.0);

        // Leader source: 0.3 * 0.1 * 3 for a wise target
        let wise = acceptance_chance(SkepticismTier::Wise, true, &params);
        assert!((wise - 0.09).abs() < 1e-6);

        // Gullible target of a leader exceeds 1.0: certain conversion
        let gullible = acceptance_chance(SkepticismTier::Gullible, true, &params);
        assert!((gullible - 2.7).abs() < 1e-6);

        // Ordinary believer, normal target: just the base chance
        let normal = acceptance_chance(SkepticismTier::Normal, false, &params);
        assert!((normal - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_gullible_target_of_leader_converts_with_certainty() {
        for seed in 0..16 {
            let population = Population::new(vec![
                agent(0, 100.0, BeliefState::Believer, SkepticismTier::Wise, true),
                agent(
                    1,
                    110.0,
                    BeliefState::Uninformed,
                    SkepticismTier::Gullible,
                    false,
                ),
            ]);
            let result = run_propagation(population, SimParams::new(50.0, 0.1, 1.0, 3.0), seed);
            assert_eq!(result.agents()[1].belief, BeliefState::Believer);
            assert!(result.agents()[1].belief_tick.is_some());
        }
    }

    #[test]
    fn test_out_of_radius_target_untouched() {
        let population = Population::new(vec![
            agent(0, 100.0, BeliefState::Believer, SkepticismTier::Wise, true),
            agent(
                1,
                200.0,
                BeliefState::Uninformed,
                SkepticismTier::Gullible,
                false,
            ),
        ]);
        let result = run_propagation(population, SimParams::default(), 42);
        assert_eq!(result.agents()[1].belief, BeliefState::Uninformed);
    }

    #[test]
    fn test_in_radius_target_always_resolves() {
        // Within radius the target always leaves Uninformed, one way or the
        // other, after a single phase.
        for seed in 0..16 {
            let population = Population::new(vec![
                agent(0, 100.0, BeliefState::Believer, SkepticismTier::Wise, false),
                agent(
                    1,
                    120.0,
                    BeliefState::Uninformed,
                    SkepticismTier::Normal,
                    false,
                ),
            ]);
            let result = run_propagation(population, SimParams::default(), seed);
            assert_ne!(result.agents()[1].belief, BeliefState::Uninformed);
        }
    }

    #[test]
    fn test_converted_target_is_not_a_source_same_tick() {
        // Chain: leader at x=100, gullible A at x=120 (in radius, converts
        // with certainty), gullible B at x=145 (in radius of A only). B must
        // stay uninformed because A was not a believer when the phase began.
        let population = Population::new(vec![
            agent(0, 100.0, BeliefState::Believer, SkepticismTier::Wise, true),
            agent(
                1,
                120.0,
                BeliefState::Uninformed,
                SkepticismTier::Gullible,
                false,
            ),
            agent(
                2,
                145.0,
                BeliefState::Uninformed,
                SkepticismTier::Gullible,
                false,
            ),
        ]);
        let result = run_propagation(population, SimParams::new(50.0, 0.1, 1.0, 3.0), 42);
        assert_eq!(result.agents()[1].belief, BeliefState::Believer);
        assert_eq!(result.agents()[2].belief, BeliefState::Uninformed);
    }

    #[test]
    fn test_disbeliever_source_never_spreads() {
        let population = Population::new(vec![
            agent(
                0,
                100.0,
                BeliefState::Disbeliever,
                SkepticismTier::Wise,
                false,
            ),
            agent(
                1,
                110.0,
                BeliefState::Uninformed,
                SkepticismTier::Gullible,
                false,
            ),
        ]);
        let result = run_propagation(population, SimParams::default(), 42);
        assert_eq!(result.agents()[1].belief, BeliefState::Uninformed);
    }

    #[test]
    fn test_later_pair_overwrites_earlier_outcome() {
        // Two leader sources both in radius of one gullible target with
        // certain conversion: the second write must land and the result is
        // still Believer. The overwrite itself is observable through the
        // acquisition tick staying Some after both evaluations.
        let population = Population::new(vec![
            agent(0, 100.0, BeliefState::Believer, SkepticismTier::Wise, true),
            agent(1, 130.0, BeliefState::Believer, SkepticismTier::Wise, true),
            agent(
                2,
                115.0,
                BeliefState::Uninformed,
                SkepticismTier::Gullible,
                false,
            ),
        ]);
        let result = run_propagation(population, SimParams::new(50.0, 0.1, 1.0, 3.0), 42);
        assert_eq!(result.agents()[2].belief, BeliefState::Believer);
    }
}
