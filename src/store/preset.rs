use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::conditions::FlightCondition;

/// A saved course with its typical playing conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePreset {
    pub id: Uuid,
    pub name: String,
    /// Feet above sea level.
    pub elevation: f64,
    /// Free-text label for the prevailing wind, e.g. "Afternoon Uphill".
    pub common_wind_pattern: String,
    pub typical_conditions: FlightCondition,
}

impl CoursePreset {
    pub fn new(
        name: &str,
        elevation: f64,
        common_wind_pattern: &str,
        typical_conditions: FlightCondition,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            elevation,
            common_wind_pattern: common_wind_pattern.to_string(),
            typical_conditions,
        }
    }
}
