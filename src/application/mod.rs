mod config;
mod game_state;
mod scheduler;

pub use config::{CellShape, Config, Geometry, HexColor};
pub use game_state::GameState;
pub use scheduler::{MAX_CATCH_UP_STEPS, Scheduler, SchedulerState, StepInterval, Stepper};
