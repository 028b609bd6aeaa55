use crate::direction::CompassPoint;
use crate::utils::constants::{
    WIND_TIER_LIGHT_MAX_MPH, WIND_TIER_MODERATE_MAX_MPH, WIND_TIER_STRONG_MAX_MPH,
};

use super::relative::{resolve, RelativeWind, WindDirection};

/// Guidance for one relative wind category at one wind speed tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindAdvisory {
    pub description: &'static str,
    pub advice: &'static str,
    /// Signed shift on the stability ladder; positive pushes toward
    /// overstable, negative toward understable.
    pub stability_adjustment: i32,
}

/// An advisory together with the resolved relative wind it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindAnalysis {
    pub advisory: WindAdvisory,
    pub relative: WindDirection,
}

const CALM: WindAdvisory = WindAdvisory {
    description: "Calm Conditions",
    advice: "Minimal wind effect. Throw your normal discs.",
    stability_adjustment: 0,
};

const HEADWIND_TIERS: [WindAdvisory; 4] = [
    WindAdvisory {
        description: "Light Headwind",
        advice: "Slight overstable tendency. Stick with your normal discs.",
        stability_adjustment: 1,
    },
    WindAdvisory {
        description: "Moderate Headwind",
        advice: "Discs will act more understable. Add +1 to fade rating.",
        stability_adjustment: 2,
    },
    WindAdvisory {
        description: "Strong Headwind",
        advice: "Significant understable effect. Use very overstable discs.",
        stability_adjustment: 3,
    },
    WindAdvisory {
        description: "Extreme Headwind",
        advice: "Discs will flip dramatically. Max overstable only.",
        stability_adjustment: 4,
    },
];

const TAILWIND_TIERS: [WindAdvisory; 4] = [
    WindAdvisory {
        description: "Light Tailwind",
        advice: "Slight extra glide. Normal disc selection.",
        stability_adjustment: 0,
    },
    WindAdvisory {
        description: "Moderate Tailwind",
        advice: "Extra distance potential. Can use more understable discs.",
        stability_adjustment: -1,
    },
    WindAdvisory {
        description: "Strong Tailwind",
        advice: "Discs will act more overstable. Good for flip-up shots.",
        stability_adjustment: -2,
    },
    WindAdvisory {
        description: "Extreme Tailwind",
        advice: "Discs will fight to fade early. Use understable options.",
        stability_adjustment: -3,
    },
];

const CROSSWIND_LEFT_TIERS: [WindAdvisory; 4] = [
    WindAdvisory {
        description: "Light Left Crosswind",
        advice: "Minimal drift for RHBH. Normal selection.",
        stability_adjustment: 0,
    },
    WindAdvisory {
        description: "Moderate Left Crosswind",
        advice: "RHBH will drift right. Slight overstable preference.",
        stability_adjustment: 1,
    },
    WindAdvisory {
        description: "Strong Left Crosswind",
        advice: "Significant right drift for RHBH. Use overstable discs.",
        stability_adjustment: 2,
    },
    WindAdvisory {
        description: "Extreme Left Crosswind",
        advice: "Major right drift. Very overstable or forehand shots.",
        stability_adjustment: 3,
    },
];

const CROSSWIND_RIGHT_TIERS: [WindAdvisory; 4] = [
    WindAdvisory {
        description: "Light Right Crosswind",
        advice: "Minimal drift for RHBH. Normal selection.",
        stability_adjustment: 0,
    },
    WindAdvisory {
        description: "Moderate Right Crosswind",
        advice: "RHBH will fight left. Slight understable preference.",
        stability_adjustment: -1,
    },
    WindAdvisory {
        description: "Strong Right Crosswind",
        advice: "Discs want to turn over. Use stable to understable.",
        stability_adjustment: -2,
    },
    WindAdvisory {
        description: "Extreme Right Crosswind",
        advice: "High turnover risk. Very understable or flex lines.",
        stability_adjustment: -3,
    },
];

/// Half-open speed bands [0,5) [5,10) [10,15) [15,inf).
fn tier(wind_speed: f64) -> usize {
    if wind_speed < WIND_TIER_LIGHT_MAX_MPH {
        0
    } else if wind_speed < WIND_TIER_MODERATE_MAX_MPH {
        1
    } else if wind_speed < WIND_TIER_STRONG_MAX_MPH {
        2
    } else {
        3
    }
}

/// Advisory for an already-resolved wind direction. Anything other than the
/// four directional categories (calm, or an unresolved echo from
/// [`resolve`]) yields the calm advisory regardless of speed.
pub fn advise(direction: WindDirection, wind_speed: f64) -> WindAdvisory {
    let tier = tier(wind_speed);
    match direction {
        WindDirection::Relative(RelativeWind::Headwind) => HEADWIND_TIERS[tier],
        WindDirection::Relative(RelativeWind::Tailwind) => TAILWIND_TIERS[tier],
        WindDirection::Relative(RelativeWind::CrosswindLeft) => CROSSWIND_LEFT_TIERS[tier],
        WindDirection::Relative(RelativeWind::CrosswindRight) => CROSSWIND_RIGHT_TIERS[tier],
        _ => CALM,
    }
}

/// Resolve the relative wind for a throw and look up its advisory.
pub fn analyze(
    wind_speed: f64,
    wind_direction: WindDirection,
    throw: CompassPoint,
) -> WindAnalysis {
    let relative = resolve(wind_direction, throw);
    WindAnalysis {
        advisory: advise(relative, wind_speed),
        relative,
    }
}

/// Stability-ladder shift for the given wind and throw.
pub fn stability_adjustment(
    wind_speed: f64,
    wind_direction: WindDirection,
    throw: CompassPoint,
) -> i32 {
    analyze(wind_speed, wind_direction, throw)
        .advisory
        .stability_adjustment
}

/// Long-form explanation of the wind effect, suitable for display. The
/// template branches on the resolved category only; the speed tier shows up
/// through the embedded advice string.
pub fn explanation(
    wind_direction: WindDirection,
    wind_speed: f64,
    throw: CompassPoint,
) -> String {
    let analysis = analyze(wind_speed, wind_direction, throw);
    let advice = analysis.advisory.advice;
    match analysis.relative {
        WindDirection::Relative(RelativeWind::Headwind) => format!(
            "Throwing {throw} into {wind_direction} wind = HEADWIND. \
             Reduces lift - discs act MORE UNDERSTABLE. {advice}"
        ),
        WindDirection::Relative(RelativeWind::Tailwind) => format!(
            "Throwing {throw} with {wind_direction} wind = TAILWIND. \
             Increases lift - discs act MORE OVERSTABLE. {advice}"
        ),
        WindDirection::Relative(RelativeWind::CrosswindLeft) => format!(
            "Throwing {throw} with {wind_direction} wind = LEFT CROSSWIND. \
             Pushes RHBH shots RIGHT. {advice}"
        ),
        WindDirection::Relative(RelativeWind::CrosswindRight) => format!(
            "Throwing {throw} with {wind_direction} wind = RIGHT CROSSWIND. \
             Pushes RHBH shots LEFT. {advice}"
        ),
        _ => format!("Throwing {throw} - calm conditions with minimal wind effects."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moderate_headwind() {
        let advisory = advise(RelativeWind::Headwind.into(), 7.0);
        assert_eq!(advisory.description, "Moderate Headwind");
        assert_eq!(advisory.stability_adjustment, 2);
    }

    #[test]
    fn tier_boundaries_are_half_open() {
        assert_eq!(advise(RelativeWind::Headwind.into(), 4.9).stability_adjustment, 1);
        assert_eq!(advise(RelativeWind::Headwind.into(), 5.0).stability_adjustment, 2);
        assert_eq!(advise(RelativeWind::Headwind.into(), 10.0).stability_adjustment, 3);
        assert_eq!(advise(RelativeWind::Headwind.into(), 15.0).stability_adjustment, 4);
    }

    #[test]
    fn adjustment_monotonic_across_tiers() {
        let speeds = [0.0, 4.9, 5.0, 9.9, 10.0, 14.9, 15.0, 30.0];
        let non_decreasing = [RelativeWind::Headwind, RelativeWind::CrosswindLeft];
        let non_increasing = [RelativeWind::Tailwind, RelativeWind::CrosswindRight];

        for relative in non_decreasing {
            let adjustments: Vec<i32> = speeds
                .iter()
                .map(|&speed| advise(relative.into(), speed).stability_adjustment)
                .collect();
            assert!(adjustments.windows(2).all(|pair| pair[0] <= pair[1]), "{relative}");
        }
        for relative in non_increasing {
            let adjustments: Vec<i32> = speeds
                .iter()
                .map(|&speed| advise(relative.into(), speed).stability_adjustment)
                .collect();
            assert!(adjustments.windows(2).all(|pair| pair[0] >= pair[1]), "{relative}");
        }
    }

    #[test]
    fn calm_ignores_speed() {
        for speed in [0.0, 7.0, 40.0] {
            let advisory = advise(RelativeWind::Calm.into(), speed);
            assert_eq!(advisory, CALM);
        }
        // An unresolved echo gets the same treatment.
        let advisory = advise(CompassPoint::Northeast.into(), 20.0);
        assert_eq!(advisory, CALM);
    }

    #[test]
    fn analyze_carries_resolved_direction() {
        let analysis = analyze(7.0, CompassPoint::South.into(), CompassPoint::North);
        assert_eq!(analysis.relative, RelativeWind::Headwind.into());
        assert_eq!(analysis.advisory.description, "Moderate Headwind");
    }

    #[test]
    fn explanation_templates() {
        let text = explanation(CompassPoint::South.into(), 7.0, CompassPoint::North);
        assert!(text.starts_with("Throwing North into South wind = HEADWIND."));
        assert!(text.ends_with("Add +1 to fade rating."));

        let text = explanation(CompassPoint::North.into(), 7.0, CompassPoint::North);
        assert!(text.contains("= TAILWIND."));

        // Intercardinal throw falls back to the calm template.
        let text = explanation(CompassPoint::South.into(), 12.0, CompassPoint::Northeast);
        assert_eq!(
            text,
            "Throwing Northeast - calm conditions with minimal wind effects."
        );
    }
}
