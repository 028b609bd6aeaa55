use serde::{Deserialize, Serialize};

use crate::utils::constants::BASELINE_TEMP_F;
use crate::wind::{RelativeWind, WindDirection};

/// Environmental snapshot a recommendation is made against.
///
/// Snapshots are replaced wholesale when conditions change, never patched
/// field by field. Equality is structural. Callers are responsible for
/// supplying finite values and enumeration members; the core does not
/// validate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightCondition {
    /// mph, non-negative.
    pub wind_speed: f64,
    pub wind_direction: WindDirection,
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// Feet above sea level; may be negative.
    pub elevation: f64,
    /// Percent, 0-100.
    pub humidity: f64,
}

impl Default for FlightCondition {
    fn default() -> Self {
        Self {
            wind_speed: 5.0,
            wind_direction: WindDirection::Relative(RelativeWind::Headwind),
            temperature: 70.0,
            elevation: 500.0,
            humidity: 60.0,
        }
    }
}

/// Coarse severity band for a condition snapshot, shown on the quick summary
/// card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionImpact {
    Ideal,
    Moderate,
    Challenging,
    Extreme,
}

impl ConditionImpact {
    /// Band from wind speed, temperature offset from 70 F, and elevation.
    pub fn from_condition(condition: &FlightCondition) -> Self {
        let score = condition.wind_speed
            + (condition.temperature - BASELINE_TEMP_F).abs() / 10.0
            + condition.elevation.abs() / 1000.0;
        if score < 5.0 {
            ConditionImpact::Ideal
        } else if score < 10.0 {
            ConditionImpact::Moderate
        } else if score < 15.0 {
            ConditionImpact::Challenging
        } else {
            ConditionImpact::Extreme
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConditionImpact::Ideal => "Ideal Conditions",
            ConditionImpact::Moderate => "Moderate Impact",
            ConditionImpact::Challenging => "Challenging Conditions",
            ConditionImpact::Extreme => "Extreme Impact",
        }
    }
}
