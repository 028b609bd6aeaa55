use serde::{Deserialize, Serialize};
use std::fmt;

use crate::direction::CompassPoint;

/// Wind direction expressed relative to the throw direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelativeWind {
    Headwind,
    Tailwind,
    #[serde(rename = "Crosswind Left")]
    CrosswindLeft,
    #[serde(rename = "Crosswind Right")]
    CrosswindRight,
    Calm,
}

impl RelativeWind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelativeWind::Headwind => "Headwind",
            RelativeWind::Tailwind => "Tailwind",
            RelativeWind::CrosswindLeft => "Crosswind Left",
            RelativeWind::CrosswindRight => "Crosswind Right",
            RelativeWind::Calm => "Calm",
        }
    }
}

impl fmt::Display for RelativeWind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wind direction as the application sees it: either an absolute compass
/// bearing (what the resolver maps) or an already-relative category (what
/// course presets and the weather bucket store).
///
/// Serializes as the bare label string, so "South" and "Crosswind Left" both
/// round-trip through stored documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WindDirection {
    Compass(CompassPoint),
    Relative(RelativeWind),
}

impl WindDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindDirection::Compass(point) => point.as_str(),
            WindDirection::Relative(relative) => relative.as_str(),
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CompassPoint> for WindDirection {
    fn from(point: CompassPoint) -> Self {
        WindDirection::Compass(point)
    }
}

impl From<RelativeWind> for WindDirection {
    fn from(relative: RelativeWind) -> Self {
        WindDirection::Relative(relative)
    }
}

/// Relative-wind table for one cardinal throw direction: the absolute
/// direction the wind blows *from* for each relative category, using the
/// right-hand-backhand convention. The four entries are pairwise distinct.
fn throw_table(throw: CompassPoint) -> Option<[(RelativeWind, CompassPoint); 4]> {
    use CompassPoint::{East, North, South, West};
    use RelativeWind::{CrosswindLeft, CrosswindRight, Headwind, Tailwind};

    match throw {
        North => Some([
            (Headwind, South),
            (Tailwind, North),
            (CrosswindLeft, East),
            (CrosswindRight, West),
        ]),
        South => Some([
            (Headwind, North),
            (Tailwind, South),
            (CrosswindLeft, West),
            (CrosswindRight, East),
        ]),
        East => Some([
            (Headwind, West),
            (Tailwind, East),
            (CrosswindLeft, South),
            (CrosswindRight, North),
        ]),
        West => Some([
            (Headwind, East),
            (Tailwind, West),
            (CrosswindLeft, North),
            (CrosswindRight, South),
        ]),
        _ => None,
    }
}

/// Classify `wind` relative to `throw`.
///
/// Only the four cardinal throw directions have defined mappings. An
/// intercardinal throw, or a wind value matching no table entry (a stored
/// relative category always falls in this case), echoes the wind value back
/// unchanged, so the caller may receive an absolute bearing where a relative
/// category is expected.
pub fn resolve(wind: WindDirection, throw: CompassPoint) -> WindDirection {
    if let (Some(table), WindDirection::Compass(from)) = (throw_table(throw), wind) {
        for (category, source) in table {
            if source == from {
                return WindDirection::Relative(category);
            }
        }
    }
    wind
}
