//! Re-exported APIs for consumers of the engine crate.

pub use crate::mission::chase::{FeasibilityBand, compute_anytime_chase, feasibility_band};
pub use crate::mission::optimal::compute_optimal_intercept;
pub use crate::mission::windows::{LaunchWindow, PRESET_WINDOWS, WindowEstimate};
pub use crate::mission::{
    FailureReason, InvalidParameterError, MissionMode, MissionModeKind, MissionOutcome,
    MissionParameters, compute, parse_launch_date,
};
pub use intercept_propulsion::PropulsionType;

pub mod plan {
    use intercept_config::{MissionModeConfig, MissionPlanConfig};
    use intercept_propulsion::PropulsionType;

    use crate::mission::windows;
    use crate::mission::{InvalidParameterError, MissionMode, MissionParameters, parse_launch_date};

    /// Convert a plan file entry into validated mission parameters.
    pub fn from_config(config: &MissionPlanConfig) -> Result<MissionParameters, InvalidParameterError> {
        let propulsion: PropulsionType = config.propulsion.parse()?;
        let mode = match &config.mode {
            MissionModeConfig::BestInterception { window } => MissionMode::BestInterception {
                window: *windows::lookup(window)?,
            },
            MissionModeConfig::Anytime { launch_date } => MissionMode::Anytime {
                launch_date: parse_launch_date(launch_date)?,
            },
        };

        let params = MissionParameters {
            propulsion,
            payload_mass_kg: config.payload_mass_kg,
            mode,
        };
        params.validate()?;
        Ok(params)
    }
}
