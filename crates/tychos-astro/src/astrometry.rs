//! Right ascension, declination, distance and elongation of a target.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};
use tychos_orbit::{SceneLookup, WORLD_UNITS_PER_AU};

use crate::angles::{Spherical, declination_from_phi, format_dec, format_ra, ra_from_theta};
use crate::distance::format_distance;
use crate::error::AstroError;

/// Numeric astrometric reading of one target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Astrometry {
    /// Right ascension in radians, `[0, 2π)`.
    pub ra: f64,
    /// Declination in radians, `[-π/2, π/2]`.
    pub dec: f64,
    /// Observer–target distance in AU with any display scale removed.
    pub distance_au: f64,
    /// Sun–observer–target angle in degrees; `None` when undefined.
    pub elongation: Option<f64>,
}

/// Display strings of an [`Astrometry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AstrometricResult {
    pub ra: String,
    pub dec: String,
    pub dist: String,
    pub elongation: String,
}

impl Astrometry {
    pub fn ra_hours(&self) -> f64 {
        self.ra.to_degrees() / 15.0
    }

    pub fn dec_degrees(&self) -> f64 {
        self.dec.to_degrees()
    }

    pub fn to_result(&self) -> AstrometricResult {
        AstrometricResult {
            ra: format_ra(self.ra),
            dec: format_dec(self.dec),
            dist: format_distance(self.distance_au),
            elongation: self
                .elongation
                .map_or_else(|| "-".to_string(), |e| format!("{e:.2}°")),
        }
    }
}

/// Angle at the observer between the Sun and the target, in degrees.
///
/// Uses the law of cosines on the three pairwise distances. The cosine is
/// clamped to `[-1, 1]`; a non-finite or exactly zero angle (target on the
/// Sun, or on the observer) yields `None`.
pub fn elongation(observer: DVec3, sun: DVec3, target: DVec3) -> Option<f64> {
    let d_es = observer.distance(sun);
    let d_et = observer.distance(target);
    let d_st = sun.distance(target);
    let cos = ((d_es * d_es + d_et * d_et - d_st * d_st) / (2.0 * d_es * d_et)).clamp(-1.0, 1.0);
    let degrees = cos.acos().to_degrees();
    if degrees.is_nan() || degrees == 0.0 {
        None
    } else {
        Some(degrees)
    }
}

/// Astrometry of `target` seen from `observer`.
///
/// `frame` is the observer's equatorial orientation in world space (its
/// local +y is the celestial north pole, local +z the RA origin). The line of
/// sight is expressed in that frame and read off as spherical coordinates.
/// `distance_scale` is divided out of the distance.
pub fn compute(
    observer: DVec3,
    frame: DQuat,
    sun: DVec3,
    target: DVec3,
    distance_scale: f64,
) -> Result<Astrometry, AstroError> {
    let line_of_sight = frame.inverse() * (target - observer);
    let spherical = Spherical::from_vector(line_of_sight);
    if spherical.radius == 0.0 || !spherical.radius.is_finite() {
        return Err(AstroError::DegenerateGeometry);
    }

    Ok(Astrometry {
        ra: ra_from_theta(spherical.theta),
        dec: declination_from_phi(spherical.phi),
        distance_au: spherical.radius / WORLD_UNITS_PER_AU / distance_scale,
        elongation: elongation(observer, sun, target),
    })
}

/// Look up observer, Sun and target by name and compute the target's
/// astrometry. Any missing body aborts with [`AstroError::MissingBody`].
pub fn astrometry_of(
    scene: &impl SceneLookup,
    observer: &str,
    sun: &str,
    target: &str,
) -> Result<Astrometry, AstroError> {
    let missing = |name: &str| AstroError::MissingBody(name.to_string());
    let observer_pos = scene.position_of(observer).ok_or_else(|| missing(observer))?;
    let frame = scene.axis_frame_of(observer).ok_or_else(|| missing(observer))?;
    let sun_pos = scene.position_of(sun).ok_or_else(|| missing(sun))?;
    let target_pos = scene.position_of(target).ok_or_else(|| missing(target))?;

    compute(
        observer_pos,
        frame,
        sun_pos,
        target_pos,
        scene.distance_scale_of(target),
    )
}
