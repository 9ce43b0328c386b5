//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without
//! recompiling. Arena dimensions and the interaction radius are engine
//! constants and intentionally absent here.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub sliders: SliderConfig,
}

/// Run-shape parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Population size, fixed for the lifetime of a run
    pub total_agents: usize,
    /// Default number of ticks for a headless run
    pub default_ticks: u64,
    /// Ticks between progress reports in the CLI runner
    pub report_interval: u64,
}

/// Defaults for the slider-adjustable parameters
#[derive(Debug, Clone, Deserialize)]
pub struct SliderConfig {
    pub kols: usize,
    pub speed: f32,
    pub wise_effect: f32,
    pub normal_effect: f32,
    pub gullible_effect: f32,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::IoError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_TUNING_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load tuning.toml: {}. Using defaults.", e);
            Self::default()
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                total_agents: 200,
                default_ticks: 600,
                report_interval: 100,
            },
            sliders: SliderConfig {
                kols: 2,
                speed: 50.0,
                wise_effect: 0.1,
                normal_effect: 1.0,
                gullible_effect: 3.0,
            },
        }
    }
}

/// Configuration error type
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
