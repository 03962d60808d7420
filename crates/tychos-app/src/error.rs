//! Application error type.

use crate::platform::PlatformError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] tychos_config::ConfigError),

    #[error(transparent)]
    Orbit(#[from] tychos_orbit::OrbitError),

    #[error(transparent)]
    Ephemerides(#[from] tychos_ephem::EphemError),

    #[error(transparent)]
    Time(#[from] tychos_time::TimeError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// `convert` needs either `--pos` or `--date`.
    #[error("give either --pos or --date")]
    MissingInstant,

    /// The ephemerides run was cancelled before it finished.
    #[error("ephemerides run cancelled")]
    Cancelled,
}
