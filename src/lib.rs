pub mod conditions;
pub mod direction;
pub mod disc;
pub mod location;
pub mod recommend;
pub mod store;
pub mod utils;
pub mod weather;
pub mod wind;

pub use conditions::{ConditionImpact, FlightCondition};
pub use direction::{CompassPoint, Rose16};
pub use disc::{Bag, Disc, Stability};
pub use location::{LocationFix, LocationState};
pub use store::{CoursePreset, PresetStore};
pub use utils::CaddyError;
pub use weather::WeatherReading;
pub use wind::{RelativeWind, WindAdvisory, WindAnalysis, WindDirection};
