//! Per-tick systems and the on-demand opinion-leader allocator.
//!
//! The tick pipeline is `update_motion` -> `propagate_belief` ->
//! `record_history`, run as a chained schedule. `set_leader_count` is not
//! part of the schedule; the engine calls it between ticks.

pub mod belief;
pub mod leaders;
pub mod motion;
pub mod record;

pub use belief::{acceptance_chance, propagate_belief};
pub use leaders::set_leader_count;
pub use motion::update_motion;
pub use record::record_history;
