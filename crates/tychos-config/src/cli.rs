//! Command-line overrides for configuration values.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Global options shared by every subcommand.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Args, Debug, Default, Clone)]
pub struct CliArgs {
    /// Path to config directory (overrides default location).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Report distances at true scale, ignoring display scale overrides.
    #[arg(long, global = true)]
    pub actual_size: Option<bool>,

    /// RON body table to use instead of the built-in one.
    #[arg(long, global = true)]
    pub bodies_file: Option<PathBuf>,

    /// Ephemerides steps per tick.
    #[arg(long, global = true)]
    pub batch_size: Option<usize>,

    /// Row ceiling for one ephemerides run.
    #[arg(long, global = true)]
    pub max_rows: Option<u64>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
        if let Some(actual) = args.actual_size {
            self.simulation.actual_size = actual;
        }
        if let Some(ref path) = args.bodies_file {
            self.simulation.bodies_file = Some(path.clone());
        }
        if let Some(size) = args.batch_size {
            self.ephemerides.batch_size = size;
        }
        if let Some(max) = args.max_rows {
            self.ephemerides.max_rows = max;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            log_level: Some("debug".to_string()),
            max_rows: Some(1_000),
            actual_size: Some(true),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.debug.log_level, "debug");
        assert_eq!(config.ephemerides.max_rows, 1_000);
        assert!(config.simulation.actual_size);
        // Non-overridden fields retain defaults
        assert_eq!(config.ephemerides.batch_size, 50);
        assert!(config.simulation.bodies_file.is_none());
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }
}
