//! Configuration management for the simulation driver

pub mod settings;

pub use settings::{CliOverrides, DisplayConfig, OutputFormat, Settings, SimulationConfig};
