//! Configuration for the Tychos simulator.
//!
//! Settings persist to disk as `config.ron`. Every section tolerates missing
//! and unknown fields, and individual values can be overridden from the
//! command line.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE, Config, DebugConfig, EphemeridesConfig, SimulationConfig};
pub use error::ConfigError;
