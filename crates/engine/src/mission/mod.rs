//! Mission outcome engine: turns mission parameters into a single immutable outcome record.

pub mod chase;
pub mod optimal;
pub mod windows;

use chrono::{DateTime, Utc};
use intercept_core::constants::{MAX_PAYLOAD_KG, MIN_PAYLOAD_KG};
use intercept_core::time::parse_instant;
use intercept_propulsion::{ParsePropulsionError, PropulsionType};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::windows::LaunchWindow;

/// How the launch date is chosen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MissionMode {
    /// Launch on one of the preset optimal windows.
    BestInterception { window: LaunchWindow },
    /// Launch on any UTC instant the caller picks.
    Anytime { launch_date: DateTime<Utc> },
}

/// Discriminant of [`MissionMode`] stored on outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissionModeKind {
    BestInterception,
    Anytime,
}

impl MissionModeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MissionModeKind::BestInterception => "best-interception",
            MissionModeKind::Anytime => "anytime",
        }
    }
}

impl MissionMode {
    pub fn kind(&self) -> MissionModeKind {
        match self {
            MissionMode::BestInterception { .. } => MissionModeKind::BestInterception,
            MissionMode::Anytime { .. } => MissionModeKind::Anytime,
        }
    }
}

/// Inputs to the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MissionParameters {
    pub propulsion: PropulsionType,
    pub payload_mass_kg: f64,
    pub mode: MissionMode,
}

impl MissionParameters {
    pub fn best_interception(
        propulsion: PropulsionType,
        payload_mass_kg: f64,
        window: LaunchWindow,
    ) -> Self {
        Self {
            propulsion,
            payload_mass_kg,
            mode: MissionMode::BestInterception { window },
        }
    }

    pub fn anytime(
        propulsion: PropulsionType,
        payload_mass_kg: f64,
        launch_date: DateTime<Utc>,
    ) -> Self {
        Self {
            propulsion,
            payload_mass_kg,
            mode: MissionMode::Anytime { launch_date },
        }
    }

    /// Checks the payload range and, for window launches, that the window is a preset.
    pub fn validate(&self) -> Result<(), InvalidParameterError> {
        let mass = self.payload_mass_kg;
        if !mass.is_finite() || !(MIN_PAYLOAD_KG..=MAX_PAYLOAD_KG).contains(&mass) {
            return Err(InvalidParameterError::PayloadOutOfRange(mass));
        }
        if let MissionMode::BestInterception { window } = &self.mode {
            if !windows::is_preset(window) {
                return Err(InvalidParameterError::UnknownWindow(window.label.to_string()));
            }
        }
        Ok(())
    }
}

/// Why an anytime launch failed to intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// Launch between February and September 2026.
    UnfavorableGeometry,
    /// Launch outside every favorable or hard-failure band.
    ExcessiveTimeAndFuel,
}

/// Result of one mission computation. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionOutcome {
    /// Always true: the engine returns a result for every valid request.
    pub success: bool,
    pub intercept_success: bool,
    pub mode: MissionModeKind,
    pub propulsion: PropulsionType,
    pub payload_mass_kg: f64,
    pub launch_date: DateTime<Utc>,
    pub arrival_date: DateTime<Utc>,
    pub travel_time_days: u32,
    /// Rounded to two decimals.
    pub delta_v_km_s: f64,
    pub fuel_required_kg: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<FailureReason>,
    pub explanation: String,
    pub educational_note: String,
}

impl MissionOutcome {
    /// Delta-v as shown to users, always two decimals.
    pub fn delta_v_display(&self) -> String {
        format!("{:.2}", self.delta_v_km_s)
    }

    pub fn status_label(&self) -> &'static str {
        if self.intercept_success {
            "Success"
        } else {
            "Failure"
        }
    }
}

/// The only error the engine raises: the request failed local validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidParameterError {
    #[error("payload mass {0} kg is outside the accepted 500-5000 kg range")]
    PayloadOutOfRange(f64),
    #[error(transparent)]
    UnknownPropulsion(#[from] ParsePropulsionError),
    #[error("'{0}' is not one of the preset intercept windows")]
    UnknownWindow(String),
    #[error("launch date '{0}' is neither YYYY-MM-DD nor an RFC 3339 timestamp")]
    InvalidLaunchDate(String),
    #[error("arrival after launch on {0} falls outside the supported calendar")]
    ArrivalOutOfRange(DateTime<Utc>),
    #[error("{operation} requires {expected} mode")]
    ModeMismatch {
        operation: &'static str,
        expected: &'static str,
    },
}

/// Parse a `YYYY-MM-DD` date (midnight UTC) or an RFC 3339 instant.
pub fn parse_launch_date(raw: &str) -> Result<DateTime<Utc>, InvalidParameterError> {
    parse_instant(raw).ok_or_else(|| InvalidParameterError::InvalidLaunchDate(raw.to_string()))
}

/// Compute an outcome for either launch mode.
pub fn compute<R: Rng + ?Sized>(
    params: &MissionParameters,
    rng: &mut R,
) -> Result<MissionOutcome, InvalidParameterError> {
    match params.mode {
        MissionMode::BestInterception { .. } => optimal::compute_optimal_intercept(params),
        MissionMode::Anytime { .. } => chase::compute_anytime_chase(params, rng),
    }
}
