// Wind speed tiers shared by the advisory tables and the scoring policies.
pub const WIND_TIER_LIGHT_MAX_MPH: f64 = 5.0; // [0, 5) light
pub const WIND_TIER_MODERATE_MAX_MPH: f64 = 10.0; // [5, 10) moderate
pub const WIND_TIER_STRONG_MAX_MPH: f64 = 15.0; // [10, 15) strong, [15, inf) extreme

pub const COLD_TEMP_F: f64 = 50.0; // below this, cold air shifts flight overstable
pub const BASELINE_TEMP_F: f64 = 70.0; // neutral temperature for impact scoring

// Maximum stability-match score in the quick policy; decays by 1 per ladder rung.
pub const STABILITY_MATCH_MAX: i32 = 3;
