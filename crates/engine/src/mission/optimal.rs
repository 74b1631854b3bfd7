//! Best-interception launches: deterministic scaling of a preset window's baseline figures.

use intercept_core::constants::TARGET_NAME;
use intercept_core::rounding::round_hundredths;
use intercept_core::time::add_days;

use super::windows::LaunchWindow;
use super::{InvalidParameterError, MissionMode, MissionModeKind, MissionOutcome, MissionParameters};

/// Compute the outcome of launching on a preset window.
///
/// Preset windows are pre-vetted, so the intercept always succeeds; only the
/// travel time, delta-v and fuel vary with propulsion and payload.
pub fn compute_optimal_intercept(
    params: &MissionParameters,
) -> Result<MissionOutcome, InvalidParameterError> {
    let MissionMode::BestInterception { window } = params.mode else {
        return Err(InvalidParameterError::ModeMismatch {
            operation: "optimal intercept",
            expected: MissionModeKind::BestInterception.as_str(),
        });
    };
    params.validate()?;

    let outcome = build_outcome(&window, params)?;
    log::debug!(
        "optimal intercept on {}: {}, {} kg -> {} days, {} km/s, {} kg fuel",
        window.label,
        params.propulsion,
        params.payload_mass_kg,
        outcome.travel_time_days,
        outcome.delta_v_display(),
        outcome.fuel_required_kg
    );
    Ok(outcome)
}

fn build_outcome(
    window: &LaunchWindow,
    params: &MissionParameters,
) -> Result<MissionOutcome, InvalidParameterError> {
    let propulsion = params.propulsion;
    let payload = params.payload_mass_kg;
    let estimate = window.estimate(propulsion, payload);
    let launch_date = window.launch_instant();
    let arrival_date = add_days(launch_date, estimate.travel_time_days)
        .ok_or(InvalidParameterError::ArrivalOutOfRange(launch_date))?;

    Ok(MissionOutcome {
        success: true,
        intercept_success: true,
        mode: MissionModeKind::BestInterception,
        propulsion,
        payload_mass_kg: payload,
        launch_date,
        arrival_date,
        travel_time_days: estimate.travel_time_days,
        delta_v_km_s: round_hundredths(estimate.delta_v_km_s),
        fuel_required_kg: estimate.fuel_required_kg,
        failure_reason: None,
        explanation: format!(
            "Optimal trajectory confirmed! Your spacecraft will intercept {TARGET_NAME} in {} days.",
            estimate.travel_time_days
        ),
        educational_note: format!(
            "Using {propulsion} propulsion, this optimal window provides a balanced mission profile. The payload mass of {payload}kg influences the final parameters."
        ),
    })
}
