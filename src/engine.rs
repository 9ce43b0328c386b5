//! Simulation Engine
//!
//! Owns the ECS world and the tick schedule, and exposes the in-process API
//! surface a control layer drives: step, live parameter updates, leader
//! reallocation, and start/pause/reset. Everything is single-threaded; a
//! call to [`Engine::step`] completes the full tick (motion, propagation,
//! recording) before returning, so ticks never overlap and parameter changes
//! between calls take effect atomically on the next tick.

use bevy_ecs::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::components::population::Population;
use crate::components::world::{SimClock, TICK_INTERVAL_MS};
use crate::config::Config;
use crate::output::history::{DiffusionHistory, DiffusionSample};
use crate::params::SimParams;
use crate::setup;
use crate::systems::{self, propagate_belief, record_history, update_motion};
use crate::SimRng;

/// Constructor contract violations. Slider-style inputs are clamped instead;
/// see [`SimParams`] and [`Engine::set_leader_count`].
#[derive(Debug, Error)]
pub enum SimError {
    #[error("population size must be positive")]
    EmptyPopulation,
    #[error("opinion-leader count {requested} exceeds population size {total}")]
    LeaderCountExceedsPopulation { requested: usize, total: usize },
}

/// The simulation engine: population, history, parameters, and the tick
/// pipeline behind one handle.
pub struct Engine {
    world: World,
    schedule: Schedule,
    running: bool,
    total_agents: usize,
    kol_target: usize,
}

impl Engine {
    /// Build an engine from configuration and a seed, spawn the population,
    /// and record the t=0 sample.
    pub fn new(config: &Config, seed: u64) -> Result<Self, SimError> {
        let sliders = &config.sliders;
        let mut rng = SmallRng::seed_from_u64(seed);

        let population =
            setup::build_population(config.simulation.total_agents, sliders.kols, &mut rng)?;
        let total_agents = population.len();

        let mut history = DiffusionHistory::new();
        history.push(DiffusionSample::measure(&population, 0.0));

        let mut world = World::new();
        world.insert_resource(SimParams::new(
            sliders.speed,
            sliders.wise_effect,
            sliders.normal_effect,
            sliders.gullible_effect,
        ));
        world.insert_resource(SimClock::new(TICK_INTERVAL_MS));
        world.insert_resource(population);
        world.insert_resource(history);
        world.insert_resource(SimRng(rng));

        let mut schedule = Schedule::default();
        schedule.add_systems((update_motion, propagate_belief, record_history).chain());

        tracing::debug!(total_agents, kols = sliders.kols, seed, "engine initialized");

        Ok(Self {
            world,
            schedule,
            running: false,
            total_agents,
            kol_target: sliders.kols,
        })
    }

    /// Run one full tick: motion, belief propagation, history recording.
    pub fn step(&mut self) {
        self.world.resource_mut::<SimClock>().advance();
        self.schedule.run(&mut self.world);
    }

    /// Reallocate the opinion-leader set; the target is clamped to
    /// `[0, total_agents]`. A fresh history sample is recorded so the time
    /// series reflects forced promotions immediately. Returns the resulting
    /// leader count.
    pub fn set_leader_count(&mut self, target: usize) -> usize {
        let count = self.world.resource_scope(|world, mut rng: Mut<SimRng>| {
            let tick = world.resource::<SimClock>().current_tick;
            let mut population = world.resource_mut::<Population>();
            systems::set_leader_count(&mut population, target, &mut rng.0, tick)
        });
        self.kol_target = count;
        self.record_sample();
        count
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.world.resource_mut::<SimParams>().set_speed(speed);
    }

    pub fn set_wise_effect(&mut self, effect: f32) {
        self.world.resource_mut::<SimParams>().set_wise_effect(effect);
    }

    pub fn set_normal_effect(&mut self, effect: f32) {
        self.world.resource_mut::<SimParams>().set_normal_effect(effect);
    }

    pub fn set_gullible_effect(&mut self, effect: f32) {
        self.world
            .resource_mut::<SimParams>()
            .set_gullible_effect(effect);
    }

    /// Allow the driver loop to schedule ticks
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop scheduling ticks without discarding state; resuming continues
    /// from the current snapshot.
    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Discard the population, history, and clock, and reinitialize
    /// synchronously with the current leader target. Parameters survive.
    pub fn reset(&mut self) -> Result<(), SimError> {
        self.running = false;
        let total = self.total_agents;
        let kols = self.kol_target;

        let population = self
            .world
            .resource_scope(|_, mut rng: Mut<SimRng>| {
                setup::build_population(total, kols, &mut rng.0)
            })?;
        self.world.insert_resource(population);
        self.world.resource_mut::<SimClock>().reset();
        self.world.resource_mut::<DiffusionHistory>().clear();
        self.record_sample();

        tracing::debug!(total, kols, "engine reset");
        Ok(())
    }

    pub fn population(&self) -> &Population {
        self.world.resource::<Population>()
    }

    pub fn history(&self) -> &DiffusionHistory {
        self.world.resource::<DiffusionHistory>()
    }

    pub fn params(&self) -> &SimParams {
        self.world.resource::<SimParams>()
    }

    pub fn leader_count(&self) -> usize {
        self.population().leader_count()
    }

    pub fn current_tick(&self) -> u64 {
        self.world.resource::<SimClock>().current_tick
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.world.resource::<SimClock>().elapsed_secs()
    }

    pub fn total_agents(&self) -> usize {
        self.total_agents
    }

    fn record_sample(&mut self) {
        let sample = {
            let population = self.world.resource::<Population>();
            let clock = self.world.resource::<SimClock>();
            DiffusionSample::measure(population, clock.elapsed_secs())
        };
        self.world.resource_mut::<DiffusionHistory>().push(sample);
    }
}
