//! Anytime chase: classify an arbitrary launch date into a feasibility band and
//! sample delta-v and travel time from that band's ranges.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use intercept_core::constants::TARGET_NAME;
use intercept_core::rounding::{clamp, mass_scale, round_hundredths};
use intercept_core::time::add_days;
use intercept_propulsion::PropulsionType;
use rand::Rng;

use super::{
    FailureReason, InvalidParameterError, MissionMode, MissionModeKind, MissionOutcome,
    MissionParameters,
};

const SUCCESS_FUEL_FLOOR_KG: f64 = 800.0;
const FAILURE_FUEL_FLOOR_KG: f64 = 5_200.0;
/// Upper bound on any band's sampled travel time.
const MAX_TRAVEL_TIME_DAYS: u32 = 720;

/// Calendar band an anytime launch date falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeasibilityBand {
    /// 2025-09-01T00:00:00Z through 2026-01-31T23:59:59Z inclusive.
    Favorable,
    /// February through September 2026.
    UnfavorableGeometry,
    /// Everything else.
    OutOfWindow,
}

impl FeasibilityBand {
    pub fn failure_reason(self) -> Option<FailureReason> {
        match self {
            FeasibilityBand::Favorable => None,
            FeasibilityBand::UnfavorableGeometry => Some(FailureReason::UnfavorableGeometry),
            FeasibilityBand::OutOfWindow => Some(FailureReason::ExcessiveTimeAndFuel),
        }
    }
}

/// Sampling ranges and fuel divisors for a failing band.
struct FailureProfile {
    delta_v_km_s: (f64, f64),
    travel_time_days: (f64, f64),
    delta_v_divisor: f64,
    travel_time_divisor: f64,
    explanation: &'static str,
    educational_note: &'static str,
}

const UNFAVORABLE_GEOMETRY: FailureProfile = FailureProfile {
    delta_v_km_s: (22.0, 34.0),
    travel_time_days: (480.0, 720.0),
    delta_v_divisor: 8.0,
    travel_time_divisor: 260.0,
    explanation: "Mission failed. Launches from Feb to Sep 2026 face unfavorable geometry; required ΔV, time, and fuel exceed feasible limits.",
    educational_note: "Chasing fast hyperbolic objects after optimal windows demands prohibitive ΔV and propellant.",
};

const OUT_OF_WINDOW: FailureProfile = FailureProfile {
    delta_v_km_s: (20.0, 30.0),
    travel_time_days: (460.0, 680.0),
    delta_v_divisor: 8.5,
    travel_time_divisor: 270.0,
    explanation: "Mission failed. Outside the September 2025–January 2026 window, trajectories demand excessive time and fuel.",
    educational_note: "Optimal alignment windows minimize ΔV; missing them pushes mission durations well beyond a year and fuel above 5 tons.",
};

fn favorable_start() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2025, 9, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn favorable_end() -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2026, 1, 31)
        .and_then(|d| d.and_hms_opt(23, 59, 59))
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Classify a launch instant. Bands are checked in priority order.
pub fn feasibility_band(launch_date: DateTime<Utc>) -> FeasibilityBand {
    if launch_date >= favorable_start() && launch_date <= favorable_end() {
        FeasibilityBand::Favorable
    } else if launch_date.year() == 2026 && (2..=9).contains(&launch_date.month()) {
        FeasibilityBand::UnfavorableGeometry
    } else {
        FeasibilityBand::OutOfWindow
    }
}

/// Neutral at 1500 kg, ±6% at the payload extremes.
pub fn mass_factor(payload_mass_kg: f64) -> f64 {
    mass_scale(payload_mass_kg, 1_500.0, 3_500.0, 0.06)
}

struct Sample {
    delta_v_km_s: f64,
    travel_time_days: f64,
    fuel_required_kg: f64,
}

fn sample_favorable<R: Rng + ?Sized>(
    propulsion: PropulsionType,
    payload_mass_kg: f64,
    rng: &mut R,
) -> Sample {
    let ranges = propulsion.chase_ranges();
    let (dv_min, dv_max) = ranges.delta_v_km_s;
    let (tof_min, tof_max) = ranges.travel_time_days;
    let factor = mass_factor(payload_mass_kg);

    let delta_v = clamp(rng.gen_range(dv_min..dv_max) * factor, dv_min, dv_max + 0.8);
    let travel_time = clamp(
        rng.gen_range(tof_min..tof_max) * (0.98 + (factor - 1.0) * 0.8),
        tof_min,
        tof_max + 20.0,
    );
    let fuel = payload_mass_kg
        * propulsion.fuel_multiplier()
        * (delta_v / 9.0)
        * (travel_time / 280.0);

    Sample {
        delta_v_km_s: delta_v,
        travel_time_days: travel_time,
        fuel_required_kg: fuel.round().max(SUCCESS_FUEL_FLOOR_KG),
    }
}

fn sample_failure<R: Rng + ?Sized>(
    profile: &FailureProfile,
    propulsion: PropulsionType,
    payload_mass_kg: f64,
    rng: &mut R,
) -> Sample {
    let delta_v = rng.gen_range(profile.delta_v_km_s.0..profile.delta_v_km_s.1);
    let travel_time = rng.gen_range(profile.travel_time_days.0..profile.travel_time_days.1);
    let fuel = payload_mass_kg
        * propulsion.fuel_multiplier()
        * (delta_v / profile.delta_v_divisor)
        * (travel_time / profile.travel_time_divisor);

    Sample {
        delta_v_km_s: delta_v,
        travel_time_days: travel_time,
        fuel_required_kg: fuel.round().max(FAILURE_FUEL_FLOOR_KG),
    }
}

/// Compute the outcome of launching on an arbitrary date.
///
/// The random source is only consumed after validation succeeds, so a rejected
/// request leaves `rng` untouched. Launches too close to the end of the calendar
/// for the longest possible chase are rejected up front.
pub fn compute_anytime_chase<R: Rng + ?Sized>(
    params: &MissionParameters,
    rng: &mut R,
) -> Result<MissionOutcome, InvalidParameterError> {
    let MissionMode::Anytime { launch_date } = params.mode else {
        return Err(InvalidParameterError::ModeMismatch {
            operation: "anytime chase",
            expected: MissionModeKind::Anytime.as_str(),
        });
    };
    params.validate()?;
    if add_days(launch_date, MAX_TRAVEL_TIME_DAYS).is_none() {
        return Err(InvalidParameterError::ArrivalOutOfRange(launch_date));
    }

    let propulsion = params.propulsion;
    let payload = params.payload_mass_kg;
    let band = feasibility_band(launch_date);

    let (sample, explanation, educational_note) = match band {
        FeasibilityBand::Favorable => (
            sample_favorable(propulsion, payload, rng),
            "Mission successful. Launch window from Sep 2025 to Jan 2026 provides a feasible intercept with realistic ΔV and transit time.".to_string(),
            format!(
                "Propulsion: {propulsion}. Heavier payloads slightly increase ΔV and time; efficient systems like ion reduce fuel for the same payload."
            ),
        ),
        FeasibilityBand::UnfavorableGeometry => (
            sample_failure(&UNFAVORABLE_GEOMETRY, propulsion, payload, rng),
            UNFAVORABLE_GEOMETRY.explanation.to_string(),
            UNFAVORABLE_GEOMETRY.educational_note.to_string(),
        ),
        FeasibilityBand::OutOfWindow => (
            sample_failure(&OUT_OF_WINDOW, propulsion, payload, rng),
            OUT_OF_WINDOW.explanation.to_string(),
            OUT_OF_WINDOW.educational_note.to_string(),
        ),
    };

    let travel_time_days = sample.travel_time_days.round() as u32;
    let arrival_date = add_days(launch_date, travel_time_days)
        .ok_or(InvalidParameterError::ArrivalOutOfRange(launch_date))?;
    let outcome = MissionOutcome {
        success: true,
        intercept_success: band == FeasibilityBand::Favorable,
        mode: MissionModeKind::Anytime,
        propulsion,
        payload_mass_kg: payload,
        launch_date,
        arrival_date,
        travel_time_days,
        delta_v_km_s: round_hundredths(sample.delta_v_km_s),
        fuel_required_kg: sample.fuel_required_kg as u32,
        failure_reason: band.failure_reason(),
        explanation,
        educational_note,
    };

    log::debug!(
        "anytime chase toward {TARGET_NAME}: {propulsion}, {payload} kg, launch {} -> {:?}, {} days, {} km/s, {} kg fuel",
        launch_date.to_rfc3339(),
        band,
        outcome.travel_time_days,
        outcome.delta_v_display(),
        outcome.fuel_required_kg
    );

    Ok(outcome)
}
