/// Kilometres per astronomical unit (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;

/// Astronomical units per light-year.
pub const AU_PER_LIGHT_YEAR: f64 = 63_241.077_088_071;

/// Below this many AU distances are shown in kilometres.
const KM_THRESHOLD_AU: f64 = 0.01;

/// Format a distance given in AU, picking the most readable unit.
///
/// - below 0.01 AU -> whole kilometres, e.g. "384400 km"
/// - from one light-year -> "4.24 ly"
/// - otherwise -> "1.52 AU"
pub fn format_distance(au: f64) -> String {
    let abs = au.abs();
    if abs < KM_THRESHOLD_AU {
        format!("{:.0} km", au * AU_KM)
    } else if abs >= AU_PER_LIGHT_YEAR {
        format!("{:.2} ly", au / AU_PER_LIGHT_YEAR)
    } else {
        format!("{au:.2} AU")
    }
}
