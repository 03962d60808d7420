//! The body settings table: built-in defaults, validation and RON persistence.

use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::MOON_DISPLAY_SCALE;
use crate::error::OrbitError;
use crate::settings::OrbitalBodySetting;

/// Ordered collection of body settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTable {
    pub bodies: Vec<OrbitalBodySetting>,
}

impl Default for BodyTable {
    fn default() -> Self {
        Self::tychos()
    }
}

/// Heliocentric sidereal period (years) to the angular rate of a body whose
/// parent frame already turns once per year.
fn sun_relative_speed(period_years: f64) -> f64 {
    TAU / period_years - TAU
}

fn planet(name: &str, period_years: f64, radius: f64, inclination: f64, start_pos: f64) -> OrbitalBodySetting {
    OrbitalBodySetting {
        name: name.to_string(),
        parent: Some("Sun".to_string()),
        speed: sun_relative_speed(period_years),
        start_pos,
        orbit_radius: radius,
        orbit_tilt_a: inclination,
        ..Default::default()
    }
}

impl BodyTable {
    /// The built-in geocentric table.
    ///
    /// Earth sits near the centre on a slow 25 344-year circle, the Moon and
    /// the Sun orbit Earth, and the planets orbit the Sun.
    pub fn tychos() -> Self {
        let bodies = vec![
            OrbitalBodySetting {
                name: "Earth".to_string(),
                speed: -TAU / 25_344.0,
                orbit_radius: 37.8453,
                tilt: -23.439062,
                size: 0.0426,
                actual_size: 0.0426,
                ..Default::default()
            },
            OrbitalBodySetting {
                name: "Moon".to_string(),
                parent: Some("Earth".to_string()),
                speed: TAU * 365.2425 / 27.321661,
                start_pos: 261.2,
                orbit_radius: 0.2570,
                orbit_tilt_a: 5.145,
                size: 0.0116,
                actual_size: 0.0116,
                scale_override: Some(MOON_DISPLAY_SCALE),
                ..Default::default()
            },
            OrbitalBodySetting {
                name: "Actual Moon".to_string(),
                alias_of: Some("Moon".to_string()),
                ..Default::default()
            },
            OrbitalBodySetting {
                name: "Sun".to_string(),
                parent: Some("Earth".to_string()),
                speed: TAU,
                orbit_radius: 100.0,
                size: 4.65,
                actual_size: 0.465,
                ..Default::default()
            },
            planet("Mercury", 0.240_846, 38.71, 7.005, 141.0),
            planet("Venus", 0.615_197, 72.33, 3.395, 305.0),
            planet("Mars", 1.880_848, 152.37, 1.850, 87.5),
            planet("Jupiter", 11.862, 520.34, 1.303, 24.0),
            planet("Saturn", 29.457, 953.70, 2.485, 230.0),
            planet("Uranus", 84.0205, 1919.1, 0.773, 11.0),
            planet("Neptune", 164.8, 3007.0, 1.770, 329.0),
        ];
        Self { bodies }
    }

    /// Load a table from a RON file and validate it.
    pub fn load(path: &Path) -> Result<Self, OrbitError> {
        let contents = std::fs::read_to_string(path).map_err(OrbitError::ReadError)?;
        let table: BodyTable = ron::from_str(&contents).map_err(OrbitError::ParseError)?;
        table.validate()?;
        log::info!("Loaded {} bodies from {}", table.bodies.len(), path.display());
        Ok(table)
    }

    /// Write the table to a RON file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), OrbitError> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir).map_err(OrbitError::WriteError)?;
        }
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(OrbitError::SerializeError)?;
        std::fs::write(path, serialized).map_err(OrbitError::WriteError)?;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&OrbitalBodySetting> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|b| b.name.as_str())
    }

    /// Check names are unique, references resolve and parent chains end.
    pub fn validate(&self) -> Result<(), OrbitError> {
        let mut by_name: HashMap<&str, &OrbitalBodySetting> = HashMap::new();
        for body in &self.bodies {
            if by_name.insert(body.name.as_str(), body).is_some() {
                return Err(OrbitError::DuplicateBody(body.name.clone()));
            }
        }

        for body in &self.bodies {
            if let Some(target) = &body.alias_of {
                match by_name.get(target.as_str()) {
                    Some(t) if !t.is_alias() => {}
                    _ => {
                        return Err(OrbitError::BadAlias {
                            alias: body.name.clone(),
                            target: target.clone(),
                        });
                    }
                }
                continue;
            }

            let mut seen = HashSet::new();
            let mut current = body;
            while let Some(parent) = &current.parent {
                if !seen.insert(current.name.as_str()) {
                    return Err(OrbitError::ParentCycle(body.name.clone()));
                }
                current = match by_name.get(parent.as_str()) {
                    Some(p) if !p.is_alias() => p,
                    _ => {
                        return Err(OrbitError::UnknownParent {
                            body: current.name.clone(),
                            parent: parent.clone(),
                        });
                    }
                };
            }
        }
        Ok(())
    }
}
