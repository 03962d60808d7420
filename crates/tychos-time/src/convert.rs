//! Conversions between simulation time `pos` and civil date/time/Julian Day.

use crate::calendar::{date_to_day_index, day_index_to_date};
use crate::clock::CivilTime;
use crate::date::CivilDate;
use crate::{DAY_EPSILON, EPOCH_JULIAN_DAY, S_DAY, S_HOUR, S_MINUTE, S_SECOND};

/// Shift applied so that `pos = 0` reads 12:00:00 on the clock.
const NOON_OFFSET: f64 = 12.0 * S_HOUR;

/// Split `pos` into a day index and the elapsed fraction of that day.
///
/// Every `pos` → day boundary decision goes through here. [`DAY_EPSILON`] is
/// added only before flooring; the returned fraction is measured from the
/// chosen day start and clamped at zero, so a value nudged onto the next day
/// reads as 00:00:00 of that day.
pub fn day_split(pos: f64) -> (i64, f64) {
    let days = (pos + NOON_OFFSET) / S_DAY;
    let index = (days + DAY_EPSILON).floor();
    (index as i64, (days - index).max(0.0))
}

/// Day index (days since 2000-06-21) containing `pos`.
pub fn pos_to_day_index(pos: f64) -> i64 {
    day_split(pos).0
}

/// Calendar date containing `pos`.
pub fn pos_to_date(pos: f64) -> CivilDate {
    day_index_to_date(pos_to_day_index(pos))
}

/// Clock time at `pos`, rounded to the second.
pub fn pos_to_time(pos: f64) -> CivilTime {
    CivilTime::from_day_fraction(day_split(pos).1)
}

/// Date and clock time at `pos`, taken from the same day split.
pub fn pos_to_date_time(pos: f64) -> (CivilDate, CivilTime) {
    let (index, fraction) = day_split(pos);
    (day_index_to_date(index), CivilTime::from_day_fraction(fraction))
}

/// Offset in `pos` units of a clock time relative to noon.
pub fn time_to_pos(time: CivilTime) -> f64 {
    time.hours as f64 * S_HOUR + time.minutes as f64 * S_MINUTE + time.seconds as f64 * S_SECOND
        - NOON_OFFSET
}

/// `pos` of a calendar date and clock time.
pub fn date_time_to_pos(date: CivilDate, time: CivilTime) -> f64 {
    date_to_day_index(date) as f64 * S_DAY + time_to_pos(time)
}

/// Integer Julian Day of the civil day containing `pos`.
pub fn pos_to_julian_day(pos: f64) -> i64 {
    pos_to_day_index(pos) + EPOCH_JULIAN_DAY
}

/// `pos` of a clock time on the civil day with Julian Day number `jd`.
pub fn julian_day_time_to_pos(jd: i64, time: CivilTime) -> f64 {
    (jd - EPOCH_JULIAN_DAY) as f64 * S_DAY + time_to_pos(time)
}

/// Fractional Julian Date. JD 2451717.0 is `pos = 0` (noon).
pub fn pos_to_julian_date(pos: f64) -> f64 {
    pos / S_DAY + EPOCH_JULIAN_DAY as f64
}

/// Inverse of [`pos_to_julian_date`].
pub fn julian_date_to_pos(jd: f64) -> f64 {
    (jd - EPOCH_JULIAN_DAY as f64) * S_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_reads_noon() {
        assert_eq!(pos_to_date(0.0), CivilDate::new(2000, 6, 21));
        assert_eq!(pos_to_time(0.0), CivilTime::NOON);
        assert_eq!(pos_to_julian_day(0.0), 2_451_717);
        assert_eq!(time_to_pos(CivilTime::NOON), 0.0);
    }

    #[test]
    fn test_midnight_belongs_to_new_day() {
        let midnight = date_time_to_pos(CivilDate::new(2024, 1, 1), CivilTime::MIDNIGHT);
        assert_eq!(pos_to_date(midnight), CivilDate::new(2024, 1, 1));
        assert_eq!(pos_to_time(midnight), CivilTime::MIDNIGHT);

        let before = midnight - 2.0 * S_SECOND;
        assert_eq!(pos_to_date(before), CivilDate::new(2023, 12, 31));
        assert_eq!(pos_to_time(before), CivilTime::new(23, 59, 58));
    }

    #[test]
    fn test_epsilon_snaps_drifted_values_up() {
        let next_day = 10.0 * S_DAY;
        let drifted = next_day - 1e-12;
        assert_eq!(pos_to_day_index(drifted), pos_to_day_index(next_day));
        assert_eq!(pos_to_time(drifted), CivilTime::NOON);
    }

    #[test]
    fn test_julian_day_time_roundtrip() {
        let pos = julian_day_time_to_pos(2_460_311, CivilTime::new(6, 30, 0));
        assert_eq!(pos_to_julian_day(pos), 2_460_311);
        assert_eq!(pos_to_time(pos), CivilTime::new(6, 30, 0));
    }

    #[test]
    fn test_fractional_julian_date() {
        assert_eq!(pos_to_julian_date(0.0), 2_451_717.0);
        let jd = pos_to_julian_date(S_DAY * 0.25);
        assert!((jd - 2_451_717.25).abs() < 1e-9);
        assert!((julian_date_to_pos(jd) - S_DAY * 0.25).abs() < 1e-15);
    }
}
