//! Calendar and clock conversions for the Tychos simulation.
//!
//! Simulation time is a signed scalar `pos` measured in tropical years
//! ([`S_YEAR`] = 1.0). `pos = 0` is 2000-06-21 12:00:00, day index 0,
//! Julian Day 2451717. Dates before 1582-10-15 use the Julian calendar,
//! later dates the Gregorian calendar, with no gap in the day count.

mod calendar;
mod clock;
mod convert;
mod date;
mod error;

pub use calendar::{date_to_day_index, day_index_to_date};
pub use clock::CivilTime;
pub use convert::{
    date_time_to_pos, day_split, julian_date_to_pos, julian_day_time_to_pos, pos_to_date,
    pos_to_date_time, pos_to_day_index, pos_to_julian_date, pos_to_julian_day, pos_to_time,
    time_to_pos,
};
pub use date::{CivilDate, add_months, add_years, days_in_month, is_valid_date, is_valid_time};
pub use error::TimeError;

/// One tropical year in `pos` units.
pub const S_YEAR: f64 = 1.0;

/// One mean day in `pos` units.
pub const S_DAY: f64 = S_YEAR / 365.2425;

/// One mean month (a twelfth of a year) in `pos` units.
pub const S_MONTH: f64 = S_YEAR / 12.0;

/// One hour in `pos` units.
pub const S_HOUR: f64 = S_DAY / 24.0;

/// One minute in `pos` units.
pub const S_MINUTE: f64 = S_HOUR / 60.0;

/// One second in `pos` units.
pub const S_SECOND: f64 = S_MINUTE / 60.0;

/// Julian Day number of day index 0 (2000-06-21).
pub const EPOCH_JULIAN_DAY: i64 = 2_451_717;

/// First day index handled by the Gregorian calendar (1582-10-15).
pub const GREGORIAN_REFORM_DAY_INDEX: i64 = -152_556;

/// Added to the day count before flooring so that values like `x.999999`
/// land on `x + 1`. Expressed in days (about 0.86 s).
pub const DAY_EPSILON: f64 = 1e-5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;
