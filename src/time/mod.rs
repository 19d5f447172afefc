//! Julian date conversions
//!
//! The pipeline works exclusively in Julian dates: whole Earth-days since
//! noon on 4713 BC Jan 1. Calendar time enters and leaves through the two
//! conversions here, anchored on the Unix epoch (JD 2440587.5).

use chrono::{DateTime, TimeZone, Utc};

use crate::constants::{DAY_S, UNIX_EPOCH_JD};

/// Julian date of a UTC calendar instant.
pub fn julian_date(t: DateTime<Utc>) -> f64 {
    let seconds = t.timestamp() as f64 + f64::from(t.timestamp_subsec_millis()) / 1000.0;
    UNIX_EPOCH_JD + seconds / DAY_S
}

/// UTC calendar instant of a Julian date, to millisecond resolution.
///
/// Returns `None` for dates chrono cannot represent (roughly beyond
/// ±262,000 years from the present).
pub fn as_datetime(jd: f64) -> Option<DateTime<Utc>> {
    let millis = ((jd - UNIX_EPOCH_JD) * DAY_S * 1000.0).round() as i64;
    Utc.timestamp_millis_opt(millis).single()
}

/// Render a Julian date with its calendar equivalent for log and display
/// output, e.g. `JD 2451545 = 2000-01-01 12:00:00 UTC`.
pub fn julian_date_as_string(jd: f64) -> String {
    match as_datetime(jd) {
        Some(t) => format!("JD {} = {}", jd, t.format("%Y-%m-%d %H:%M:%S UTC")),
        None => format!("JD {}", jd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::J2000;
    use approx::assert_relative_eq;

    #[test]
    fn test_j2000_is_noon_jan_1_2000() {
        let t = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_relative_eq!(julian_date(t), J2000);
    }

    #[test]
    fn test_unix_epoch() {
        let t = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_relative_eq!(julian_date(t), UNIX_EPOCH_JD);
    }

    #[test]
    fn test_round_trip_to_millisecond() {
        let t = Utc.with_ymd_and_hms(2021, 6, 30, 23, 59, 59).unwrap();
        let back = as_datetime(julian_date(t)).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_julian_date_as_string() {
        let s = julian_date_as_string(J2000);
        assert_eq!(s, "JD 2451545 = 2000-01-01 12:00:00 UTC");
    }
}
