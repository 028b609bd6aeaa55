use hyzer::{Disc, FlightCondition, WindDirection};

/// Condition snapshot with the given wind, everything else at the defaults.
pub fn condition(wind_speed: f64, wind_direction: impl Into<WindDirection>) -> FlightCondition {
    FlightCondition {
        wind_speed,
        wind_direction: wind_direction.into(),
        ..FlightCondition::default()
    }
}

/// Names of a ranked list, in order.
pub fn names(discs: &[Disc]) -> Vec<&str> {
    discs.iter().map(|disc| disc.name.as_str()).collect()
}
