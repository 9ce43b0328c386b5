//! Aggregate output: the diffusion time series and its JSON export.

pub mod history;

pub use history::{write_history, DiffusionHistory, DiffusionSample, HISTORY_CAPACITY};
