pub mod clause;
pub mod contract;
pub mod offer;
pub mod role;

pub use clause::*;
pub use contract::*;
pub use offer::*;
pub use role::*;
