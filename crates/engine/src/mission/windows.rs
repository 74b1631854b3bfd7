//! Preset optimal intercept windows and their per-configuration estimates.

use chrono::{DateTime, NaiveDate, Utc};
use intercept_core::rounding::mass_scale;
use intercept_core::time::midnight_utc;
use intercept_propulsion::PropulsionType;

use super::InvalidParameterError;

/// A precomputed launch date judged favorable for interception.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchWindow {
    pub label: &'static str,
    pub date: NaiveDate,
    pub baseline_travel_time_days: f64,
    pub baseline_delta_v_km_s: f64,
}

/// Travel time, delta-v and fuel for one window under a given configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowEstimate {
    pub mass_modifier: f64,
    pub travel_time_days: u32,
    /// Unrounded; callers round for display.
    pub delta_v_km_s: f64,
    pub fuel_required_kg: u32,
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("preset window date out of range"),
    }
}

pub const PRESET_WINDOWS: [LaunchWindow; 3] = [
    LaunchWindow {
        label: "Dec 4–6, 2025",
        date: ymd(2025, 12, 4),
        baseline_travel_time_days: 125.0,
        baseline_delta_v_km_s: 18.5,
    },
    LaunchWindow {
        label: "Dec 11–13, 2025",
        date: ymd(2025, 12, 11),
        baseline_travel_time_days: 118.0,
        baseline_delta_v_km_s: 17.2,
    },
    LaunchWindow {
        label: "Dec 19, 2025",
        date: ymd(2025, 12, 19),
        baseline_travel_time_days: 110.0,
        baseline_delta_v_km_s: 16.1,
    },
];

/// 0% at 500 kg, +20% at 5000 kg.
pub fn mass_modifier(payload_mass_kg: f64) -> f64 {
    mass_scale(payload_mass_kg, 500.0, 4_500.0, 0.2)
}

impl LaunchWindow {
    pub fn launch_instant(&self) -> DateTime<Utc> {
        midnight_utc(self.date)
    }

    pub fn estimate(&self, propulsion: PropulsionType, payload_mass_kg: f64) -> WindowEstimate {
        let coefficients = propulsion.coefficients();
        let mass_modifier = mass_modifier(payload_mass_kg);

        let travel_time =
            (self.baseline_travel_time_days * coefficients.time_modifier * mass_modifier).round();
        let delta_v = self.baseline_delta_v_km_s * coefficients.delta_v_modifier * mass_modifier;
        let fuel = (payload_mass_kg * coefficients.fuel_multiplier * (delta_v / 10.0)).round();

        WindowEstimate {
            mass_modifier,
            travel_time_days: travel_time as u32,
            delta_v_km_s: delta_v,
            fuel_required_kg: fuel as u32,
        }
    }
}

pub fn is_preset(window: &LaunchWindow) -> bool {
    PRESET_WINDOWS.contains(window)
}

/// Find a preset by label (case-insensitive, `-` accepted for `–`) or by `YYYY-MM-DD` date.
pub fn lookup(key: &str) -> Result<&'static LaunchWindow, InvalidParameterError> {
    let wanted = normalize_label(key);
    let by_date = NaiveDate::parse_from_str(key.trim(), "%Y-%m-%d").ok();
    PRESET_WINDOWS
        .iter()
        .find(|w| normalize_label(w.label) == wanted || Some(w.date) == by_date)
        .ok_or_else(|| InvalidParameterError::UnknownWindow(key.to_string()))
}

fn normalize_label(label: &str) -> String {
    label.trim().replace('–', "-").to_lowercase()
}
