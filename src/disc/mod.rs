mod bag;
mod disc;

pub use bag::Bag;
pub use disc::{Disc, Stability};
