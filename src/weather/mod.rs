use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conditions::FlightCondition;
use crate::direction::Rose16;
use crate::wind::{RelativeWind, WindDirection};

/// A structured weather observation handed in by the weather collaborator.
///
/// How the reading was obtained (provider, transport, parsing) is not the
/// core's concern; by the time one of these exists the data is already
/// well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Degrees Fahrenheit.
    pub temperature: f64,
    /// mph.
    pub wind_speed: f64,
    /// Meteorological bearing the wind blows from, if the provider reported
    /// one.
    pub wind_direction_degrees: Option<f64>,
    /// Percent relative humidity.
    pub humidity: f64,
    /// Free-text condition label, e.g. "Clear" or "Rain".
    pub condition: String,
    pub location_name: String,
    pub observed_at: DateTime<Utc>,
}

impl WeatherReading {
    pub fn temperature_formatted(&self) -> String {
        format!("{}°F", self.temperature as i64)
    }

    pub fn wind_speed_formatted(&self) -> String {
        format!("{} mph", self.wind_speed as i64)
    }

    pub fn humidity_formatted(&self) -> String {
        format!("{}%", self.humidity as i64)
    }

    /// Coarsen the reported bearing into the wind bucket the condition model
    /// stores. The near-cardinal rose points break toward the cardinal
    /// sector (NNE and NNW count as north-sector, and so on); the true
    /// diagonals and a missing bearing default to Headwind.
    pub fn wind_bucket(&self) -> WindDirection {
        let degrees = match self.wind_direction_degrees {
            Some(degrees) => degrees,
            None => return RelativeWind::Headwind.into(),
        };
        let bucket = match Rose16::from_degrees(degrees) {
            Rose16::N | Rose16::Nne | Rose16::Nnw => RelativeWind::Headwind,
            Rose16::S | Rose16::Sse | Rose16::Ssw => RelativeWind::Tailwind,
            Rose16::E | Rose16::Ene | Rose16::Ese => RelativeWind::CrosswindRight,
            Rose16::W | Rose16::Wnw | Rose16::Wsw => RelativeWind::CrosswindLeft,
            _ => RelativeWind::Headwind,
        };
        bucket.into()
    }

    /// Build a condition snapshot from this reading. Elevation is not part
    /// of a weather observation and is supplied by the caller.
    pub fn to_flight_condition(&self, elevation: f64) -> FlightCondition {
        FlightCondition {
            wind_speed: self.wind_speed,
            wind_direction: self.wind_bucket(),
            temperature: self.temperature,
            elevation,
            humidity: self.humidity,
        }
    }
}
