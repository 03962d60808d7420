//! Wall-clock time of day.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;

/// Time of day on a 24-hour clock. Never holds 24:00:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CivilTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl CivilTime {
    pub const MIDNIGHT: CivilTime = CivilTime::new(0, 0, 0);
    pub const NOON: CivilTime = CivilTime::new(12, 0, 0);

    pub const fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Build from a fraction of a day in `[0, 1)`.
    ///
    /// Hours and minutes are floored, seconds rounded; a rounded 60 carries
    /// into the minute, a carried 60 into the hour, and 24 wraps to 0.
    pub fn from_day_fraction(fraction: f64) -> Self {
        let total_hours = fraction * 24.0;
        let mut hours = total_hours.floor() as u32;
        let total_minutes = (total_hours - hours as f64) * 60.0;
        let mut minutes = total_minutes.floor() as u32;
        let mut seconds = ((total_minutes - minutes as f64) * 60.0).round() as u32;

        if seconds == 60 {
            seconds = 0;
            minutes += 1;
        }
        if minutes == 60 {
            minutes = 0;
            hours += 1;
        }
        if hours == 24 {
            hours = 0;
        }
        Self::new(hours, minutes, seconds)
    }

    /// Seconds since midnight.
    pub fn seconds_of_day(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Parse and check the clock ranges.
    pub fn parse_valid(s: &str) -> Result<Self, TimeError> {
        let time: CivilTime = s.parse()?;
        if time.hours > 23 || time.minutes > 59 || time.seconds > 59 {
            return Err(TimeError::TimeOutOfRange(s.to_string()));
        }
        Ok(time)
    }
}

impl FromStr for CivilTime {
    type Err = TimeError;

    /// Accepts `HH:MM:SS` only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::MalformedTime(s.to_string());
        let fields: Vec<&str> = s.split(':').collect();
        let &[h, m, sec] = fields.as_slice() else {
            return Err(malformed());
        };

        let digits = |p: &str| p.len() == 2 && p.bytes().all(|b| b.is_ascii_digit());
        if !digits(h) || !digits(m) || !digits(sec) {
            return Err(malformed());
        }

        Ok(CivilTime::new(
            h.parse().map_err(|_| malformed())?,
            m.parse().map_err(|_| malformed())?,
            sec.parse().map_err(|_| malformed())?,
        ))
    }
}

impl fmt::Display for CivilTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::is_valid_time;

    #[test]
    fn test_parse_time() {
        assert_eq!("12:00:00".parse::<CivilTime>().unwrap(), CivilTime::NOON);
        assert_eq!("07:05:09".parse::<CivilTime>().unwrap(), CivilTime::new(7, 5, 9));
        assert!("7:05:09".parse::<CivilTime>().is_err());
        assert!(" 12:00:00".parse::<CivilTime>().is_err());
        assert!("12:00:00 ".parse::<CivilTime>().is_err());
        assert!(!is_valid_time("7:05:09"));
        assert!("12:0:00".parse::<CivilTime>().is_err());
        assert!("12:00".parse::<CivilTime>().is_err());
        assert!("12:00:00:00".parse::<CivilTime>().is_err());
        assert!("ab:cd:ef".parse::<CivilTime>().is_err());
    }

    #[test]
    fn test_range_checks() {
        assert!(CivilTime::parse_valid("23:59:59").is_ok());
        assert!(CivilTime::parse_valid("24:00:00").is_err());
        assert!(CivilTime::parse_valid("10:60:00").is_err());
        assert!(CivilTime::parse_valid("10:00:60").is_err());
    }

    #[test]
    fn test_fraction_rollover() {
        // 59.6 seconds rounds to 60 and carries through to the hour
        let fraction = (10.0 * 3600.0 + 59.0 * 60.0 + 59.6) / 86_400.0;
        assert_eq!(CivilTime::from_day_fraction(fraction), CivilTime::new(11, 0, 0));

        let almost_midnight = (86_400.0 - 0.2) / 86_400.0;
        assert_eq!(CivilTime::from_day_fraction(almost_midnight), CivilTime::MIDNIGHT);
    }

    #[test]
    fn test_display_pads() {
        assert_eq!(CivilTime::new(1, 2, 3).to_string(), "01:02:03");
        assert_eq!(CivilTime::new(1, 2, 3).seconds_of_day(), 3723);
    }
}
