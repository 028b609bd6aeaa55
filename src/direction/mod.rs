use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight compass directions used for throw directions and
/// compass headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl CompassPoint {
    /// All eight points in clockwise order starting at North.
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::North,
        CompassPoint::Northeast,
        CompassPoint::East,
        CompassPoint::Southeast,
        CompassPoint::South,
        CompassPoint::Southwest,
        CompassPoint::West,
        CompassPoint::Northwest,
    ];

    /// Nearest compass point for a heading in degrees [0, 360).
    pub fn from_heading(degrees: f64) -> Self {
        let index = ((degrees + 22.5) / 45.0) as usize % 8;
        Self::ALL[index]
    }

    /// True for the four cardinal directions, the only throw directions with
    /// a defined relative-wind mapping.
    pub fn is_cardinal(&self) -> bool {
        matches!(
            self,
            CompassPoint::North | CompassPoint::South | CompassPoint::East | CompassPoint::West
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompassPoint::North => "North",
            CompassPoint::Northeast => "Northeast",
            CompassPoint::East => "East",
            CompassPoint::Southeast => "Southeast",
            CompassPoint::South => "South",
            CompassPoint::Southwest => "Southwest",
            CompassPoint::West => "West",
            CompassPoint::Northwest => "Northwest",
        }
    }
}

impl fmt::Display for CompassPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The sixteen-point compass rose, used when coarsening a weather bearing
/// into a wind bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rose16 {
    N,
    Nne,
    Ne,
    Ene,
    E,
    Ese,
    Se,
    Sse,
    S,
    Ssw,
    Sw,
    Wsw,
    W,
    Wnw,
    Nw,
    Nnw,
}

impl Rose16 {
    pub const ALL: [Rose16; 16] = [
        Rose16::N,
        Rose16::Nne,
        Rose16::Ne,
        Rose16::Ene,
        Rose16::E,
        Rose16::Ese,
        Rose16::Se,
        Rose16::Sse,
        Rose16::S,
        Rose16::Ssw,
        Rose16::Sw,
        Rose16::Wsw,
        Rose16::W,
        Rose16::Wnw,
        Rose16::Nw,
        Rose16::Nnw,
    ];

    /// Nearest rose point for a bearing in degrees [0, 360).
    pub fn from_degrees(degrees: f64) -> Self {
        let index = ((degrees + 11.25) / 22.5) as usize % 16;
        Self::ALL[index]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rose16::N => "N",
            Rose16::Nne => "NNE",
            Rose16::Ne => "NE",
            Rose16::Ene => "ENE",
            Rose16::E => "E",
            Rose16::Ese => "ESE",
            Rose16::Se => "SE",
            Rose16::Sse => "SSE",
            Rose16::S => "S",
            Rose16::Ssw => "SSW",
            Rose16::Sw => "SW",
            Rose16::Wsw => "WSW",
            Rose16::W => "W",
            Rose16::Wnw => "WNW",
            Rose16::Nw => "NW",
            Rose16::Nnw => "NNW",
        }
    }
}

impl fmt::Display for Rose16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
