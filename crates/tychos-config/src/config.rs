//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tychos_ephem::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_ROWS, StepUnit};
use tychos_time::{CivilDate, CivilTime, S_DAY, date_time_to_pos};

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub ephemerides: EphemeridesConfig,
    pub debug: DebugConfig,
}

/// Live simulation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Date shown at startup, `YYYY-MM-DD`.
    pub start_date: String,
    /// Clock time shown at startup, `HH:MM:SS`.
    pub start_time: String,
    /// Draw bodies at true relative size (disables display scale overrides).
    pub actual_size: bool,
    /// Simulated time per real second while running, in `pos` units.
    pub speed: f64,
    /// RON body table replacing the built-in one.
    pub bodies_file: Option<PathBuf>,
    /// Bodies offered for tracking and ephemerides.
    pub trackable: Vec<String>,
}

/// Batch generator settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EphemeridesConfig {
    /// Steps processed per tick.
    pub batch_size: usize,
    /// Upper bound on steps x bodies for one run.
    pub max_rows: u64,
    /// Where exports are written; the working directory when unset.
    pub export_dir: Option<PathBuf>,
    pub step_size: f64,
    pub step_unit: StepUnit,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_date: "2000-06-21".to_string(),
            start_time: "12:00:00".to_string(),
            actual_size: false,
            speed: S_DAY,
            bodies_file: None,
            trackable: [
                "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Uranus",
                "Neptune",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl Default for EphemeridesConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            max_rows: DEFAULT_MAX_ROWS,
            export_dir: None,
            step_size: 1.0,
            step_unit: StepUnit::Days,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl SimulationConfig {
    /// `pos` of the configured start date and time.
    pub fn start_pos(&self) -> Result<f64, ConfigError> {
        let date = CivilDate::parse_valid(&self.start_date).map_err(ConfigError::InvalidStart)?;
        let time = CivilTime::parse_valid(&self.start_time).map_err(ConfigError::InvalidStart)?;
        Ok(date_time_to_pos(date, time))
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Returns `Some(new_config)` if the file on disk differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
