//! Day-index ⇄ calendar date conversion across the 1582 reform.
//!
//! Day index 0 is 2000-06-21; Julian Day = day index + [`EPOCH_JULIAN_DAY`].

use crate::date::CivilDate;
use crate::{EPOCH_JULIAN_DAY, GREGORIAN_REFORM_DAY_INDEX};

/// Shifts the proleptic Gregorian day number (counted from 0000-03-01) so
/// that 2000-06-21 lands on day index 0.
const GREGORIAN_DAY_OFFSET: i64 = 730_597;

/// Calendar date of a day index. Julian calendar before 1582-10-15.
pub fn day_index_to_date(day_index: i64) -> CivilDate {
    if day_index < GREGORIAN_REFORM_DAY_INDEX {
        julian_calendar_date(day_index + EPOCH_JULIAN_DAY)
    } else {
        gregorian_calendar_date(day_index + GREGORIAN_DAY_OFFSET)
    }
}

/// Day index of a calendar date. Inverse of [`day_index_to_date`].
///
/// The date is not validated: out-of-range days roll over arithmetically.
pub fn date_to_day_index(date: CivilDate) -> i64 {
    if date.is_julian() {
        julian_day_number(date) - EPOCH_JULIAN_DAY
    } else {
        gregorian_day_number(date) - GREGORIAN_DAY_OFFSET
    }
}

fn days_before_year(y: i64) -> i64 {
    365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Gregorian day number with years starting on March 1st.
fn gregorian_day_number(date: CivilDate) -> i64 {
    let m = (date.month as i64 + 9) % 12;
    let y = date.year as i64 - m / 10;
    days_before_year(y) + (m * 306 + 5) / 10 + (date.day as i64 - 1)
}

fn gregorian_calendar_date(g: i64) -> CivilDate {
    let mut y = (10_000 * g + 14_780).div_euclid(3_652_425);
    let mut ddd = g - days_before_year(y);
    if ddd < 0 {
        y -= 1;
        ddd = g - days_before_year(y);
    }
    let mi = (100 * ddd + 52) / 3060;
    let month = (mi + 2) % 12 + 1;
    y += (mi + 2) / 12;
    let day = ddd - (mi * 306 + 5) / 10 + 1;
    CivilDate::new(y as i32, month as u32, day as u32)
}

/// Julian Day number of a Julian-calendar date.
fn julian_day_number(date: CivilDate) -> i64 {
    let a = (14 - date.month as i64) / 12;
    let y = date.year as i64 + 4800 - a;
    let m = date.month as i64 + 12 * a - 3;
    date.day as i64 + (153 * m + 2) / 5 + 365 * y + y.div_euclid(4) - 32_083
}

fn julian_calendar_date(jdn: i64) -> CivilDate {
    let f = jdn + 1401;
    let e = 4 * f + 3;
    let g = e.rem_euclid(1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e.div_euclid(1461) - 4716 + (14 - month) / 12;
    CivilDate::new(year as i32, month as u32, day as u32)
}
