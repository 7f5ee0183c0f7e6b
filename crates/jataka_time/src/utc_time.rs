//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the canonical instant representation used throughout the
//! engine. It parses the engine's wire format (`YYYY-MM-DDThh:mm:ssZ`,
//! optionally with fractional seconds) and converts to Julian Dates in
//! the UTC and TT timescales.

use crate::delta_t::jd_utc_to_jd_tt;
use crate::error::TimeError;
use crate::julian::calendar_to_jd;

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Parse an ISO-8601 UTC instant: `YYYY-MM-DDThh:mm:ss[.fff]Z`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let b = s.as_bytes();
        if b.len() < 20 {
            return Err(TimeError::Parse("expected YYYY-MM-DDThh:mm:ssZ"));
        }
        if b[b.len() - 1] != b'Z' {
            return Err(TimeError::Parse("instant must end with Z (UTC)"));
        }
        if b[4] != b'-' || b[7] != b'-' || (b[10] != b'T' && b[10] != b't') {
            return Err(TimeError::Parse("malformed date separators"));
        }
        if b[13] != b':' || b[16] != b':' {
            return Err(TimeError::Parse("malformed time separators"));
        }

        let year: i32 = s[0..4]
            .parse()
            .map_err(|_| TimeError::Parse("non-numeric year"))?;
        let month: u32 = s[5..7]
            .parse()
            .map_err(|_| TimeError::Parse("non-numeric month"))?;
        let day: u32 = s[8..10]
            .parse()
            .map_err(|_| TimeError::Parse("non-numeric day"))?;
        let hour: u32 = s[11..13]
            .parse()
            .map_err(|_| TimeError::Parse("non-numeric hour"))?;
        let minute: u32 = s[14..16]
            .parse()
            .map_err(|_| TimeError::Parse("non-numeric minute"))?;
        let second: f64 = s[17..s.len() - 1]
            .parse()
            .map_err(|_| TimeError::Parse("non-numeric seconds"))?;

        let t = Self::new(year, month, day, hour, minute, second);
        t.validate()?;
        Ok(t)
    }

    /// Check all calendar fields against their valid ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !(1..=12).contains(&self.month) {
            return Err(TimeError::InvalidDate("month must be 1-12"));
        }
        if self.day < 1 || self.day > days_in_month(self.year, self.month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidDate("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidDate("minute must be 0-59"));
        }
        if !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::InvalidDate("second must be in [0, 60)"));
        }
        Ok(())
    }

    /// Day of month including the time-of-day fraction.
    fn day_fraction(&self) -> f64 {
        self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0
    }

    /// Julian Date in the UTC timescale.
    pub fn to_jd_utc(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day_fraction())
    }

    /// Julian Date in TT (delta-T applied).
    pub fn to_jd_tt(&self) -> f64 {
        jd_utc_to_jd_tt(self.to_jd_utc(), self.year, self.month)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:09.6}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Days in a calendar month. Pre-Gregorian years use the Julian leap rule,
/// matching `calendar_to_jd`.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = if year < 1582 {
                year % 4 == 0
            } else {
                (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
            };
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let t = UtcTime::parse("1869-10-02T07:12:00Z").unwrap();
        assert_eq!((t.year, t.month, t.day), (1869, 10, 2));
        assert_eq!((t.hour, t.minute), (7, 12));
        assert!(t.second.abs() < 1e-12);
    }

    #[test]
    fn parse_fractional_seconds() {
        let t = UtcTime::parse("2024-03-20T12:30:45.125Z").unwrap();
        assert!((t.second - 45.125).abs() < 1e-9);
    }

    #[test]
    fn parse_rejects_missing_z() {
        assert!(matches!(
            UtcTime::parse("2024-03-20T12:30:45"),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn parse_rejects_bad_separator() {
        assert!(UtcTime::parse("2024/03/20T12:30:45Z").is_err());
    }

    #[test]
    fn parse_rejects_bad_month() {
        assert!(matches!(
            UtcTime::parse("2024-13-20T12:30:45Z"),
            Err(TimeError::InvalidDate(_))
        ));
    }

    #[test]
    fn parse_rejects_feb_30() {
        assert!(UtcTime::parse("2024-02-30T00:00:00Z").is_err());
    }

    #[test]
    fn leap_year_gregorian() {
        assert!(UtcTime::parse("2024-02-29T00:00:00Z").is_ok());
        assert!(UtcTime::parse("2023-02-29T00:00:00Z").is_err());
        assert!(UtcTime::parse("1900-02-29T00:00:00Z").is_err());
        assert!(UtcTime::parse("2000-02-29T00:00:00Z").is_ok());
    }

    #[test]
    fn leap_year_julian_centuries() {
        // 1500 is a leap year in the Julian calendar.
        assert!(UtcTime::parse("1500-02-29T00:00:00Z").is_ok());
    }

    #[test]
    fn jd_utc_known() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!((t.to_jd_utc() - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn jd_tt_ahead_of_utc() {
        let t = UtcTime::new(2000, 1, 1, 12, 0, 0.0);
        assert!(t.to_jd_tt() > t.to_jd_utc());
    }

    #[test]
    fn display_round_trip() {
        let t = UtcTime::new(1869, 10, 2, 2, 33, 29.0);
        assert_eq!(t.to_string(), "1869-10-02T02:33:29Z");
        let back = UtcTime::parse(&t.to_string()).unwrap();
        assert_eq!(back, t);
    }
}
