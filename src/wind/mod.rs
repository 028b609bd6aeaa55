mod advisory;
mod relative;

pub use advisory::{advise, analyze, explanation, stability_adjustment, WindAdvisory, WindAnalysis};
pub use relative::{resolve, RelativeWind, WindDirection};
