//! Static per-body orbital parameters.

use serde::{Deserialize, Serialize};

/// Orbital parameters of one body, as loaded from the body table.
///
/// Angles are in degrees, `speed` in radians of orbital phase per unit of
/// `pos`, lengths in world units. `orbit_center_a/b/c` map to the x/z/y
/// axes of the container frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalBodySetting {
    pub name: String,
    /// Body whose pivot carries this body's container. `None` hangs the body
    /// off the world origin.
    pub parent: Option<String>,
    pub speed: f64,
    pub start_pos: f64,
    pub orbit_radius: f64,
    pub orbit_center_a: f64,
    pub orbit_center_b: f64,
    pub orbit_center_c: f64,
    pub orbit_tilt_a: f64,
    pub orbit_tilt_b: f64,
    /// Axial tilt about the z axis.
    pub tilt: f64,
    /// Axial tilt about the x axis.
    pub tilt_b: f64,
    pub size: f64,
    pub actual_size: f64,
    /// Scale applied to `orbit_radius` and the centre offsets when bodies are
    /// not shown at actual size. Reported distances divide it back out.
    pub scale_override: Option<f64>,
    /// Marks this entry as a display alias of another body. All orbital
    /// fields of an alias are ignored.
    pub alias_of: Option<String>,
}

impl Default for OrbitalBodySetting {
    fn default() -> Self {
        Self {
            name: String::new(),
            parent: None,
            speed: 0.0,
            start_pos: 0.0,
            orbit_radius: 0.0,
            orbit_center_a: 0.0,
            orbit_center_b: 0.0,
            orbit_center_c: 0.0,
            orbit_tilt_a: 0.0,
            orbit_tilt_b: 0.0,
            tilt: 0.0,
            tilt_b: 0.0,
            size: 1.0,
            actual_size: 1.0,
            scale_override: None,
            alias_of: None,
        }
    }
}

impl OrbitalBodySetting {
    /// Scale factor in effect for this body's orbit geometry.
    pub fn display_scale(&self, actual_size: bool) -> f64 {
        if actual_size {
            1.0
        } else {
            self.scale_override.unwrap_or(1.0)
        }
    }

    pub fn is_alias(&self) -> bool {
        self.alias_of.is_some()
    }
}
