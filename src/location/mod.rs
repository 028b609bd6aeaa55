use serde::{Deserialize, Serialize};

/// A resolved device location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// What the location collaborator reported. Denied permission, absent
/// hardware, and lookup failures all surface as `Unavailable` data rather
/// than errors; the label stands in for a resolved place name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LocationState {
    Available(LocationFix),
    Unavailable { label: String },
}

impl LocationState {
    pub fn unavailable(label: &str) -> Self {
        LocationState::Unavailable {
            label: label.to_string(),
        }
    }

    pub fn fix(&self) -> Option<LocationFix> {
        match self {
            LocationState::Available(fix) => Some(*fix),
            LocationState::Unavailable { .. } => None,
        }
    }
}
