//! Propulsion categories and the static coefficients the mission engine scales by.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Engine technology used for an intercept attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropulsionType {
    /// High thrust, limited range.
    Chemical,
    /// High efficiency, long duration.
    Ion,
    /// High performance, complex.
    Nuclear,
    /// Propellant-free, slow acceleration.
    Solar,
}

/// Static scaling coefficients for a propulsion type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Propellant mass per unit payload and delta-v.
    pub fuel_multiplier: f64,
    /// Scales baseline travel time.
    pub time_modifier: f64,
    /// Scales baseline delta-v.
    pub delta_v_modifier: f64,
}

/// Sampling ranges used when an arbitrary launch date lands inside the favorable band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseRanges {
    pub delta_v_km_s: (f64, f64),
    pub travel_time_days: (f64, f64),
}

/// Display metadata shown next to each propulsion option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub max_delta_v_km_s: f64,
    pub description: &'static str,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown propulsion type '{0}' (expected chemical, ion, nuclear or solar)")]
pub struct ParsePropulsionError(pub String);

impl PropulsionType {
    pub const ALL: [PropulsionType; 4] = [
        PropulsionType::Chemical,
        PropulsionType::Ion,
        PropulsionType::Nuclear,
        PropulsionType::Solar,
    ];

    pub fn coefficients(self) -> Coefficients {
        match self {
            PropulsionType::Chemical => Coefficients {
                fuel_multiplier: 3.2,
                time_modifier: 1.1,
                delta_v_modifier: 1.05,
            },
            PropulsionType::Ion => Coefficients {
                fuel_multiplier: 1.5,
                time_modifier: 0.9,
                delta_v_modifier: 0.85,
            },
            PropulsionType::Nuclear => Coefficients {
                fuel_multiplier: 2.1,
                time_modifier: 0.8,
                delta_v_modifier: 0.8,
            },
            PropulsionType::Solar => Coefficients {
                fuel_multiplier: 0.8,
                time_modifier: 1.4,
                delta_v_modifier: 0.9,
            },
        }
    }

    pub fn fuel_multiplier(self) -> f64 {
        self.coefficients().fuel_multiplier
    }

    /// Delta-v and travel-time ranges for a launch inside the favorable band.
    pub fn chase_ranges(self) -> ChaseRanges {
        let (delta_v_km_s, travel_time_days) = match self {
            PropulsionType::Chemical => ((12.0, 16.0), (160.0, 260.0)),
            PropulsionType::Ion => ((8.0, 12.0), (200.0, 320.0)),
            PropulsionType::Nuclear => ((10.0, 14.0), (150.0, 240.0)),
            PropulsionType::Solar => ((6.0, 10.0), (260.0, 380.0)),
        };
        ChaseRanges {
            delta_v_km_s,
            travel_time_days,
        }
    }

    pub fn profile(self) -> Profile {
        match self {
            PropulsionType::Chemical => Profile {
                name: "Chemical Rocket",
                max_delta_v_km_s: 15.0,
                description: "High thrust, limited range",
            },
            PropulsionType::Ion => Profile {
                name: "Ion Drive",
                max_delta_v_km_s: 25.0,
                description: "High efficiency, long duration",
            },
            PropulsionType::Nuclear => Profile {
                name: "Nuclear Thermal",
                max_delta_v_km_s: 30.0,
                description: "High performance, complex",
            },
            PropulsionType::Solar => Profile {
                name: "Solar Sail",
                max_delta_v_km_s: 12.0,
                description: "Unlimited fuel, slow acceleration",
            },
        }
    }

    /// Lowercase identifier used in configs, history records and CLI flags.
    pub fn as_str(self) -> &'static str {
        match self {
            PropulsionType::Chemical => "chemical",
            PropulsionType::Ion => "ion",
            PropulsionType::Nuclear => "nuclear",
            PropulsionType::Solar => "solar",
        }
    }
}

impl fmt::Display for PropulsionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropulsionType {
    type Err = ParsePropulsionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        PropulsionType::ALL
            .into_iter()
            .find(|p| p.as_str() == lower)
            .ok_or_else(|| ParsePropulsionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("ION".parse::<PropulsionType>(), Ok(PropulsionType::Ion));
        assert_eq!(" Solar ".parse::<PropulsionType>(), Ok(PropulsionType::Solar));
        assert!("warp".parse::<PropulsionType>().is_err());
    }

    #[test]
    fn favorable_ranges_are_non_empty() {
        for propulsion in PropulsionType::ALL {
            let r = propulsion.chase_ranges();
            assert!(r.delta_v_km_s.0 < r.delta_v_km_s.1);
            assert!(r.travel_time_days.0 < r.travel_time_days.1);
        }
    }
}
