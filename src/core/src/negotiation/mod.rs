pub mod config;
pub mod counter;
pub mod demands;
pub mod desk;
pub mod error;
pub mod messages;
pub mod negotiation;
pub mod outcome;
pub mod satisfaction;
pub mod strategy;

pub use config::*;
pub use counter::*;
pub use demands::*;
pub use desk::*;
pub use error::*;
pub use messages::*;
pub use negotiation::*;
pub use outcome::*;
pub use satisfaction::*;
pub use strategy::*;
