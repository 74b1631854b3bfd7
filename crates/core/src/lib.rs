//! Core constants, calendar helpers and rounding primitives shared across the Intercept Calculator workspace.

/// Mission-wide constants.
pub mod constants {
    /// Name of the interstellar object every mission chases.
    pub const TARGET_NAME: &str = "3I/ATLAS";
    /// Lightest payload the engine accepts (kg).
    pub const MIN_PAYLOAD_KG: f64 = 500.0;
    /// Heaviest payload the engine accepts (kg).
    pub const MAX_PAYLOAD_KG: f64 = 5_000.0;
}

/// Numeric rounding helpers matching the engine's display conventions.
pub mod rounding {
    /// Round to two decimal places (km/s display precision).
    #[inline]
    pub fn round_hundredths(v: f64) -> f64 {
        (v * 100.0).round() / 100.0
    }

    /// Clamp `v` into `[min, max]`.
    #[inline]
    pub fn clamp(v: f64, min: f64, max: f64) -> f64 {
        v.max(min).min(max)
    }

    /// Linear interpolation factor used by payload-mass modifiers:
    /// `1 + ((mass - pivot) / span) * gain`.
    #[inline]
    pub fn mass_scale(mass_kg: f64, pivot_kg: f64, span_kg: f64, gain: f64) -> f64 {
        1.0 + ((mass_kg - pivot_kg) / span_kg) * gain
    }
}

/// Calendar utilities over UTC instants.
pub mod time {
    use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};

    /// Midnight UTC for the given calendar date.
    pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
        date.and_time(NaiveTime::MIN).and_utc()
    }

    /// Advance an instant by a whole number of days; `None` past the end of chrono's range.
    pub fn add_days(start: DateTime<Utc>, days: u32) -> Option<DateTime<Utc>> {
        start.checked_add_signed(TimeDelta::days(i64::from(days)))
    }

    /// Parse either a bare `YYYY-MM-DD` date (midnight UTC) or an RFC 3339 instant.
    pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Some(midnight_utc(date));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::rounding::*;
    use super::time::*;
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};

    #[test]
    fn hundredths_round_half_away_from_zero() {
        assert_eq!(round_hundredths(18.5 * 0.85), 15.73);
        assert_eq!(round_hundredths(16.1), 16.1);
        assert_eq!(clamp(5.2, 6.0, 10.8), 6.0);
        assert_eq!(mass_scale(500.0, 500.0, 4_500.0, 0.2), 1.0);
    }

    #[test]
    fn add_days_keeps_time_of_day() {
        let start = Utc.with_ymd_and_hms(2025, 12, 4, 6, 30, 0).unwrap();
        let end = add_days(start, 113).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 3, 27, 6, 30, 0).unwrap());
        assert_eq!((end - start).num_days(), 113);
        assert_eq!(add_days(DateTime::<Utc>::MAX_UTC, 1), None);
    }

    #[test]
    fn parse_instant_accepts_dates_and_rfc3339() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(parse_instant(" 2025-10-01 "), Some(midnight_utc(date)));
        assert_eq!(
            parse_instant("2025-10-01T12:00:00+02:00"),
            Some(Utc.with_ymd_and_hms(2025, 10, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(parse_instant("next tuesday"), None);
    }
}
