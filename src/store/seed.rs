use crate::conditions::FlightCondition;
use crate::disc::{Disc, Stability};
use crate::wind::RelativeWind;

use super::preset::CoursePreset;

/// Course presets seeded when nothing valid is stored.
pub fn seed_presets() -> Vec<CoursePreset> {
    vec![
        CoursePreset::new(
            "Mountain Course",
            2500.0,
            "Afternoon Uphill",
            FlightCondition {
                wind_speed: 12.0,
                wind_direction: RelativeWind::Headwind.into(),
                temperature: 65.0,
                elevation: 2500.0,
                humidity: 40.0,
            },
        ),
        CoursePreset::new(
            "Lakeside Park",
            800.0,
            "Crosswind from Water",
            FlightCondition {
                wind_speed: 8.0,
                wind_direction: RelativeWind::CrosswindRight.into(),
                temperature: 75.0,
                elevation: 800.0,
                humidity: 65.0,
            },
        ),
        CoursePreset::new(
            "Forest Hills",
            1200.0,
            "Protected & Calm",
            FlightCondition {
                wind_speed: 3.0,
                wind_direction: RelativeWind::Calm.into(),
                temperature: 70.0,
                elevation: 1200.0,
                humidity: 60.0,
            },
        ),
    ]
}

/// Starter bag seeded when no inventory is stored.
pub fn seed_discs() -> Vec<Disc> {
    vec![
        Disc::new("Destroyer", "Innova", 12, 5, -1, 3, Stability::Overstable),
        Disc::new("Buzzz", "Discraft", 5, 4, -1, 1, Stability::Stable),
        Disc::new("Leopard3", "Innova", 7, 5, -2, 1, Stability::Understable),
        Disc::new("Firebird", "Innova", 9, 3, 0, 4, Stability::VeryOverstable),
        Disc::new("Tern", "Innova", 12, 6, -3, 2, Stability::Understable),
        Disc::new("Roc3", "Innova", 5, 4, 0, 3, Stability::Overstable),
    ]
}
