pub mod currency;
pub mod random;

pub use currency::*;
pub use random::*;
