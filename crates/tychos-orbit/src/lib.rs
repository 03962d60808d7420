//! Geocentric orbit hierarchy for the Tychos model.
//!
//! Every body hangs off its parent's pivot through three frames: a static
//! container (centre offset and tilt), an orbit frame rotating about the
//! vertical axis by `speed * pos - start_pos`, and a pivot at `orbit_radius`
//! along the rotated x axis. Evaluating the chain at a given `pos` yields
//! world-space positions; 100 world units are one AU.

mod error;
mod model;
mod scene;
mod settings;
mod table;

pub use error::OrbitError;
pub use model::{BodyPose, OrbitModel, orbit_angle};
pub use scene::SceneLookup;
pub use settings::OrbitalBodySetting;
pub use table::BodyTable;

/// World units per astronomical unit.
pub const WORLD_UNITS_PER_AU: f64 = 100.0;

/// Radius/offset scale-up applied to the lunar orbit when bodies are not
/// drawn at actual size.
pub const MOON_DISPLAY_SCALE: f64 = 39.2078;
