//! History Recording System
//!
//! Samples the population into the bounded diffusion history. Runs last in
//! the tick schedule, so every recorded sample reflects a fully updated
//! snapshot.

use bevy_ecs::prelude::*;

use crate::components::population::Population;
use crate::components::world::SimClock;
use crate::output::history::{DiffusionHistory, DiffusionSample};

/// Append one sample for the current tick
pub fn record_history(
    population: Res<Population>,
    clock: Res<SimClock>,
    mut history: ResMut<DiffusionHistory>,
) {
    history.push(DiffusionSample::measure(&population, clock.elapsed_secs()));
}
