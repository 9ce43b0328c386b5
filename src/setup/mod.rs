//! Initialization: population construction.

pub mod population;

pub use population::build_population;
