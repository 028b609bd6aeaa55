mod preset;
mod seed;
mod store;

pub use preset::CoursePreset;
pub use seed::{seed_discs, seed_presets};
pub use store::PresetStore;
