// Domain layer - Core simulation
pub mod domain;

// Application layer - Scheduling, configuration and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{
    BoardBounds, Cell, CellSet, EngineEvent, Evolution, Figure, LifeError, Offset, Placement,
    SimulationEngine, Snapshot, presets,
};
pub use application::{Config, GameState, Scheduler, SchedulerState, StepInterval, Stepper};
