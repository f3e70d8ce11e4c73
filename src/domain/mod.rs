mod algorithm;
mod bounds;
mod cell;
mod cell_set;
mod engine;
mod error;
pub mod neighbors;
mod patterns;
pub mod rules;

pub use algorithm::Evolution;
pub use bounds::BoardBounds;
pub use cell::{Cell, Offset};
pub use cell_set::{CellSet, Placement, Snapshot};
pub use engine::{EngineEvent, SimulationEngine};
pub use error::LifeError;
pub use patterns::{Figure, presets};
