pub mod error;
pub mod types;

pub use error::{Result, SkirmishError};
pub use types::{Coordinate, Faction, UnitId};
