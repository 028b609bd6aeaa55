use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-rung classification of a disc's flight tendency, ordered from least
/// to most overstable. The variant order is the ladder order, so the
/// discriminant doubles as the ladder index.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Stability {
    #[serde(rename = "Very Understable")]
    VeryUnderstable,
    Understable,
    Stable,
    Overstable,
    #[serde(rename = "Very Overstable")]
    VeryOverstable,
}

impl Stability {
    /// The ladder from least to most overstable.
    pub const LADDER: [Stability; 5] = [
        Stability::VeryUnderstable,
        Stability::Understable,
        Stability::Stable,
        Stability::Overstable,
        Stability::VeryOverstable,
    ];

    /// Position on the ladder, 0 (Very Understable) through 4 (Very
    /// Overstable).
    pub fn ladder_index(&self) -> usize {
        *self as usize
    }

    /// Shift along the ladder by a signed adjustment, clamping at both ends.
    pub fn shifted(&self, adjustment: i32) -> Stability {
        let index = (self.ladder_index() as i32 + adjustment).clamp(0, 4) as usize;
        Self::LADDER[index]
    }

    /// True for Overstable and Very Overstable.
    pub fn leans_overstable(&self) -> bool {
        matches!(self, Stability::Overstable | Stability::VeryOverstable)
    }

    /// True for Understable and Very Understable.
    pub fn leans_understable(&self) -> bool {
        matches!(self, Stability::Understable | Stability::VeryUnderstable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::VeryUnderstable => "Very Understable",
            Stability::Understable => "Understable",
            Stability::Stable => "Stable",
            Stability::Overstable => "Overstable",
            Stability::VeryOverstable => "Very Overstable",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A disc in a player's bag: the four flight numbers plus a stability class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disc {
    pub name: String,
    pub brand: String,
    /// 1-14
    pub speed: i32,
    /// 1-7
    pub glide: i32,
    /// -5-1
    pub turn: i32,
    /// 0-5
    pub fade: i32,
    pub stability: Stability,
}

impl Disc {
    pub fn new(
        name: &str,
        brand: &str,
        speed: i32,
        glide: i32,
        turn: i32,
        fade: i32,
        stability: Stability,
    ) -> Self {
        Self {
            name: name.to_string(),
            brand: brand.to_string(),
            speed,
            glide,
            turn,
            fade,
            stability,
        }
    }

    /// A copy of this disc named "<name> Copy".
    pub fn duplicate(&self) -> Disc {
        Disc {
            name: format!("{} Copy", self.name),
            ..self.clone()
        }
    }
}
