pub mod attributes;
pub mod calculators;
pub mod player;

pub use attributes::*;
pub use calculators::*;
pub use player::*;
