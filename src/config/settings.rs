//! Configuration settings for the simulation driver

use crate::game_of_life::{parse_rules, DEFAULT_RULES, DEFAULT_SIZE};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Rule descriptor, `"<survival>/<birth>"`
    pub rules: String,
    /// Side length of a square grid; ignored when `pattern_file` is set
    pub size: Option<usize>,
    pub randomize: bool,
    /// Seed for reproducible random grids
    pub seed: Option<u64>,
    pub generations: usize,
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Delay between frames
    pub interval_ms: u64,
    pub format: OutputFormat,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Coords,
    Json,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_string(),
            size: Some(DEFAULT_SIZE),
            randomize: true,
            seed: None,
            generations: 50,
            pattern_file: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            interval_ms: 200,
            format: OutputFormat::Text,
            clear_screen: false,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        parse_rules(&self.simulation.rules).context("Invalid rule descriptor")?;

        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if self.simulation.size == Some(0) {
            anyhow::bail!("Grid size must be positive");
        }

        if let Some(ref pattern) = self.simulation.pattern_file {
            if !pattern.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref rules) = cli_overrides.rules {
            self.simulation.rules = rules.clone();
        }
        if let Some(size) = cli_overrides.size {
            self.simulation.size = Some(size);
        }
        if cli_overrides.no_randomize {
            self.simulation.randomize = false;
        }
        if let Some(seed) = cli_overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref pattern) = cli_overrides.pattern_file {
            self.simulation.pattern_file = Some(pattern.clone());
        }
        if let Some(interval_ms) = cli_overrides.interval_ms {
            self.display.interval_ms = interval_ms;
        }
        if let Some(format) = cli_overrides.format {
            self.display.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rules: Option<String>,
    pub size: Option<usize>,
    pub no_randomize: bool,
    pub seed: Option<u64>,
    pub generations: Option<usize>,
    pub pattern_file: Option<PathBuf>,
    pub interval_ms: Option<u64>,
    pub format: Option<OutputFormat>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.simulation.rules, "23/3");
        assert_eq!(settings.simulation.size, Some(10));
        assert_eq!(settings.display.interval_ms, 200);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("config/default.yaml");

        let mut settings = Settings::default();
        settings.simulation.rules = "23/36".to_string();
        settings.simulation.seed = Some(9);
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.simulation.rules, "23/36");
        assert_eq!(loaded.simulation.seed, Some(9));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let settings: Settings = serde_yaml::from_str("simulation:\n  rules: \"/2\"\n").unwrap();
        assert_eq!(settings.simulation.rules, "/2");
        assert_eq!(settings.simulation.generations, 50);
        assert_eq!(settings.display.format, OutputFormat::Text);
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::default();
        settings.simulation.rules = "233".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.generations = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.size = Some(0);
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.pattern_file = Some(PathBuf::from("does/not/exist.txt"));
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_lenient_rules_pass_validation() {
        let mut settings = Settings::default();
        settings.simulation.rules = "one/two".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_repair_loaded_config() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("zero.yaml");
        std::fs::write(&path, "simulation:\n  generations: 0\n").unwrap();

        let mut settings = Settings::from_file(&path).unwrap();
        assert!(settings.validate().is_err());

        settings.merge_with_cli(&CliOverrides {
            generations: Some(5),
            ..Default::default()
        });
        assert_eq!(settings.simulation.generations, 5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_merge_with_cli() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            rules: Some("1/1".to_string()),
            size: Some(30),
            no_randomize: true,
            generations: Some(7),
            format: Some(OutputFormat::Json),
            ..Default::default()
        });

        assert_eq!(settings.simulation.rules, "1/1");
        assert_eq!(settings.simulation.size, Some(30));
        assert!(!settings.simulation.randomize);
        assert_eq!(settings.simulation.generations, 7);
        assert_eq!(settings.display.format, OutputFormat::Json);
        assert_eq!(settings.display.interval_ms, 200);
    }
}
