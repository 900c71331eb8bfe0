pub mod contracts;
pub mod negotiation;
pub mod player;
pub mod shared;

pub use contracts::*;
pub use negotiation::*;
pub use player::*;
pub use shared::*;
