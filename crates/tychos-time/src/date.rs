//! Civil calendar dates, validation and month/year arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::clock::CivilTime;
use crate::error::TimeError;

/// A calendar date in astronomical year numbering (year 0 = 1 BC).
///
/// Dates before 1582-10-15 are read as Julian calendar dates, later dates
/// as Gregorian ones. The struct itself does not enforce validity; use
/// [`CivilDate::parse_valid`] or [`is_valid_date`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// First Gregorian date after the 1582 reform.
    pub const GREGORIAN_REFORM: CivilDate = CivilDate::new(1582, 10, 15);

    /// Whether this date is read with the Julian calendar.
    pub fn is_julian(&self) -> bool {
        *self < Self::GREGORIAN_REFORM
    }

    /// Whether this date is one of 1582-10-05 ..= 1582-10-14.
    pub fn in_reform_gap(&self) -> bool {
        self.year == 1582 && self.month == 10 && (5..=14).contains(&self.day)
    }

    /// Parse and check month/day ranges and the reform gap.
    pub fn parse_valid(s: &str) -> Result<Self, TimeError> {
        let date: CivilDate = s.parse()?;
        if !(1..=12).contains(&date.month)
            || date.day < 1
            || date.day > days_in_month(date.year, date.month)
        {
            return Err(TimeError::DateOutOfRange(s.to_string()));
        }
        if date.in_reform_gap() {
            return Err(TimeError::ReformGap(s.to_string()));
        }
        Ok(date)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Accepts `YYYY-MM-DD` with an optional leading `-` for years before 1 BC.
    /// Years take four or more digits, month and day exactly two.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::MalformedDate(s.to_string());
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let mut parts = body.split('-');
        let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        let all_digits = |p: &str, len: std::ops::RangeInclusive<usize>| {
            len.contains(&p.len()) && p.bytes().all(|b| b.is_ascii_digit())
        };
        if !all_digits(y, 4..=7) || !all_digits(m, 2..=2) || !all_digits(d, 2..=2) {
            return Err(malformed());
        }

        let year: i32 = y.parse().map_err(|_| malformed())?;
        let month: u32 = m.parse().map_err(|_| malformed())?;
        let day: u32 = d.parse().map_err(|_| malformed())?;

        Ok(CivilDate::new(if negative { -year } else { year }, month, day))
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -self.year, self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

/// Number of days in `month` of `year`.
///
/// Years up to and including 1582 follow the Julian leap rule (every fourth
/// year); later years follow the Gregorian rule. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let leap = if year <= 1582 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    };
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => 0,
    }
}

/// Strict date check: shape, month/day ranges, and the 1582 reform gap.
pub fn is_valid_date(s: &str) -> bool {
    CivilDate::parse_valid(s).is_ok()
}

/// Strict `HH:MM:SS` check with a 24-hour clock.
pub fn is_valid_time(s: &str) -> bool {
    CivilTime::parse_valid(s).is_ok()
}

/// Shift a date by whole years, keeping month and day.
///
/// No end-of-month clamping: 2024-02-29 plus one year is 2025-02-29, which
/// [`is_valid_date`] rejects. Callers decide how to handle that.
pub fn add_years(date: CivilDate, years: i32) -> CivilDate {
    CivilDate::new(date.year + years, date.month, date.day)
}

/// Shift a date by whole months, keeping the day of month (no clamping).
pub fn add_months(date: CivilDate, months: i32) -> CivilDate {
    let total = date.year as i64 * 12 + (date.month as i64 - 1) + months as i64;
    CivilDate::new(
        total.div_euclid(12) as i32,
        total.rem_euclid(12) as u32 + 1,
        date.day,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let d: CivilDate = "2000-06-21".parse().unwrap();
        assert_eq!(d, CivilDate::new(2000, 6, 21));
        assert_eq!(d.to_string(), "2000-06-21");

        let bc: CivilDate = "-0500-03-01".parse().unwrap();
        assert_eq!(bc, CivilDate::new(-500, 3, 1));
        assert_eq!(bc.to_string(), "-0500-03-01");
    }

    #[test]
    fn test_malformed_dates() {
        for s in ["", "2000", "2000-06", "2000-06-21-01", "2000/06/21", "20a0-01-01", "2000-123-1"] {
            assert!(s.parse::<CivilDate>().is_err(), "{s} should not parse");
            assert!(!is_valid_date(s));
        }
    }

    #[test]
    fn test_format_is_strict() {
        for s in [" 2024-01-05", "2024-01-05 ", " 2024-1-5 ", "2024-1-05", "2024-01-5", "-0500-3-1", "800-01-01"] {
            assert!(s.parse::<CivilDate>().is_err(), "{s} should not parse");
            assert!(!is_valid_date(s));
        }
    }

    #[test]
    fn test_reform_cutover_validation() {
        assert!(is_valid_date("1582-10-04"));
        for day in 5..=14 {
            let s = format!("1582-10-{day:02}");
            assert!(!is_valid_date(&s), "{s} must be rejected");
        }
        assert!(is_valid_date("1582-10-15"));
        assert_eq!(
            CivilDate::parse_valid("1582-10-10"),
            Err(TimeError::ReformGap("1582-10-10".to_string()))
        );
    }

    #[test]
    fn test_month_lengths_and_leap_rules() {
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("1900-02-29"));
        assert!(is_valid_date("2000-02-29"));
        // Julian leap rule: 1500 was a leap year
        assert!(is_valid_date("1500-02-29"));
        assert!(!is_valid_date("2024-04-31"));
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("2024-01-00"));
        assert_eq!(days_in_month(-4, 2), 29);
    }

    #[test]
    fn test_add_months_crosses_years() {
        let d = CivilDate::new(2024, 11, 15);
        assert_eq!(add_months(d, 3), CivilDate::new(2025, 2, 15));
        assert_eq!(add_months(d, -11), CivilDate::new(2023, 12, 15));
        assert_eq!(add_months(CivilDate::new(1, 1, 1), -1), CivilDate::new(0, 12, 1));
    }

    #[test]
    fn test_add_keeps_day_without_clamping() {
        let end_of_jan = CivilDate::new(2024, 1, 31);
        let shifted = add_months(end_of_jan, 1);
        assert_eq!(shifted, CivilDate::new(2024, 2, 31));
        assert!(!is_valid_date(&shifted.to_string()));

        let leap_day = CivilDate::new(2024, 2, 29);
        assert_eq!(add_years(leap_day, 4), CivilDate::new(2028, 2, 29));
        assert!(!is_valid_date(&add_years(leap_day, 1).to_string()));
    }

    #[test]
    fn test_is_julian() {
        assert!(CivilDate::new(1582, 10, 4).is_julian());
        assert!(!CivilDate::new(1582, 10, 15).is_julian());
        assert!(CivilDate::new(-100, 12, 31).is_julian());
    }
}
