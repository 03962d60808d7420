//! Spherical coordinates and sexagesimal angle formatting.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::DVec3;

/// Spherical coordinates with the pole on +y.
///
/// `theta` is the azimuth around +y measured from +z towards +x, in
/// `(-π, π]`; `phi` is the polar angle from +y, in `[0, π]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    pub radius: f64,
    pub theta: f64,
    pub phi: f64,
}

impl Spherical {
    pub fn from_vector(v: DVec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self {
                radius,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }
}

/// Right ascension in `[0, 2π)` from an azimuth.
pub fn ra_from_theta(theta: f64) -> f64 {
    let ra = if theta < 0.0 { theta + TAU } else { theta };
    if ra >= TAU { ra - TAU } else { ra }
}

/// Declination in `[-π/2, π/2]` from a polar angle.
pub fn declination_from_phi(phi: f64) -> f64 {
    if phi <= 0.0 { phi + FRAC_PI_2 } else { FRAC_PI_2 - phi }
}

/// Split a non-negative value into whole units, minutes and rounded seconds,
/// carrying 60 s into the minute and 60 min into the unit.
fn sexagesimal(value: f64) -> (u32, u32, u32) {
    let mut whole = value.floor() as u32;
    let minutes_f = (value - whole as f64) * 60.0;
    let mut minutes = minutes_f.floor() as u32;
    let mut seconds = ((minutes_f - minutes as f64) * 60.0).round() as u32;
    if seconds == 60 {
        seconds = 0;
        minutes += 1;
    }
    if minutes == 60 {
        minutes = 0;
        whole += 1;
    }
    (whole, minutes, seconds)
}

/// Format a right ascension (radians) as `HHhMMmSSs`.
pub fn format_ra(ra: f64) -> String {
    let hours = ra_from_theta(ra) * 12.0 / PI;
    let (mut h, m, s) = sexagesimal(hours);
    if h >= 24 {
        h -= 24;
    }
    format!("{h:02}h{m:02}m{s:02}s")
}

/// Format a declination (radians) as `±DD°MM'SS"`.
pub fn format_dec(dec: f64) -> String {
    let degrees = dec.to_degrees();
    let sign = if degrees < 0.0 { '-' } else { '+' };
    let (d, m, s) = sexagesimal(degrees.abs());
    format!("{sign}{d:02}°{m:02}'{s:02}\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spherical_axes() {
        let z = Spherical::from_vector(DVec3::new(0.0, 0.0, 2.0));
        assert_eq!(z.radius, 2.0);
        assert_eq!(z.theta, 0.0);
        assert!((z.phi - FRAC_PI_2).abs() < 1e-12);

        let x = Spherical::from_vector(DVec3::X);
        assert!((x.theta - FRAC_PI_2).abs() < 1e-12);

        let pole = Spherical::from_vector(DVec3::Y);
        assert_eq!(pole.phi, 0.0);

        let origin = Spherical::from_vector(DVec3::ZERO);
        assert_eq!(origin.radius, 0.0);
    }

    #[test]
    fn test_negative_theta_wraps() {
        let ra = ra_from_theta(-FRAC_PI_2);
        assert!((ra - 3.0 * FRAC_PI_2).abs() < 1e-12);
        assert_eq!(format_ra(-FRAC_PI_2), "18h00m00s");
    }

    #[test]
    fn test_declination_mapping() {
        assert_eq!(declination_from_phi(0.0), FRAC_PI_2);
        assert!(declination_from_phi(FRAC_PI_2).abs() < 1e-15);
        assert!((declination_from_phi(PI) + FRAC_PI_2).abs() < 1e-15);
    }

    #[test]
    fn test_format_ra() {
        assert_eq!(format_ra(0.0), "00h00m00s");
        assert_eq!(format_ra(PI / 2.0), "06h00m00s");
        // 1h 30m 15s
        let ra = (1.0 + 30.0 / 60.0 + 15.0 / 3600.0) * PI / 12.0;
        assert_eq!(format_ra(ra), "01h30m15s");
        // 23h 59m 59.8s rounds to the next day and wraps
        let ra = (24.0 - 0.2 / 3600.0) * PI / 12.0;
        assert_eq!(format_ra(ra), "00h00m00s");
    }

    #[test]
    fn test_format_dec() {
        assert_eq!(format_dec(0.0), "+00°00'00\"");
        assert_eq!(format_dec(23.439062_f64.to_radians()), "+23°26'21\"");
        assert_eq!(format_dec((-5.5_f64).to_radians()), "-05°30'00\"");
        assert_eq!(format_dec(FRAC_PI_2), "+90°00'00\"");
    }
}
