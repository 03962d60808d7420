//! Observer-relative astrometry for the Tychos model.
//!
//! Turns the world positions of an observer (Earth), the Sun and a target
//! into right ascension, declination, distance and solar elongation, and
//! formats them for display.

mod angles;
mod astrometry;
mod distance;
mod error;

pub use angles::{Spherical, declination_from_phi, format_dec, format_ra, ra_from_theta};
pub use astrometry::{AstrometricResult, Astrometry, astrometry_of, compute, elongation};
pub use distance::{AU_KM, AU_PER_LIGHT_YEAR, format_distance};
pub use error::AstroError;
