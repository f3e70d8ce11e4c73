//! Fixed-cadence step scheduler.
//!
//! The scheduler is a cooperative timer: the host loop reports elapsed time
//! through [`Scheduler::advance`] and due steps run inline, one after the
//! other. Steps therefore never overlap each other or an edit.

use std::time::Duration;

use crate::domain::{LifeError, SimulationEngine};

/// Upper bound on steps run by a single `advance` call. A longer stall
/// drops the backlog instead of replaying it.
pub const MAX_CATCH_UP_STEPS: u32 = 8;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Anything the scheduler can drive.
pub trait Stepper {
    /// Advance one generation
    fn step(&mut self);

    /// Return to the empty initial state
    fn reset(&mut self);
}

impl Stepper for SimulationEngine {
    fn step(&mut self) {
        SimulationEngine::step(self);
    }

    fn reset(&mut self) {
        self.clear();
    }
}

/// A non-zero tick period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepInterval(Duration);

impl StepInterval {
    pub fn new(duration: Duration) -> Result<Self, LifeError> {
        if duration.is_zero() {
            return Err(LifeError::InvalidInterval(duration));
        }
        Ok(Self(duration))
    }

    pub const fn duration(&self) -> Duration {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SchedulerState {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Cancellable timer handle; dropping it cancels every future tick.
#[derive(Debug)]
struct Timer {
    interval: Duration,
    elapsed: Duration,
}

impl Timer {
    fn new(interval: StepInterval) -> Self {
        Self {
            interval: interval.duration(),
            elapsed: Duration::ZERO,
        }
    }

    /// Accumulate `delta` and return how many ticks are due now.
    fn take_due(&mut self, delta: Duration) -> u32 {
        self.elapsed = self.elapsed.saturating_add(delta);
        let interval = self.interval.as_nanos();
        let due = self.elapsed.as_nanos() / interval;
        // remainder < interval, so its whole seconds fit back into a Duration
        let remainder = self.elapsed.as_nanos() % interval;
        self.elapsed = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );

        if due > u128::from(MAX_CATCH_UP_STEPS) {
            log::warn!(
                "scheduler fell behind by {due} steps, running {MAX_CATCH_UP_STEPS} and dropping the rest"
            );
            MAX_CATCH_UP_STEPS
        } else {
            due as u32
        }
    }
}

/// Drives a [`Stepper`] at a fixed interval.
///
/// `Idle --start--> Running --pause--> Paused --start--> Running`, and
/// `clear` returns to `Idle` from anywhere.
#[derive(Debug, Default)]
pub struct Scheduler {
    state: SchedulerState,
    interval: Option<StepInterval>,
    timer: Option<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Interval of the current or most recent run
    pub const fn interval(&self) -> Option<StepInterval> {
        self.interval
    }

    /// Begin (or restart) periodic stepping. The first step fires after one
    /// full interval; calling this while running restarts the phase.
    pub fn start(&mut self, interval: StepInterval) {
        log::info!(
            "scheduler {:?} -> Running every {:?}",
            self.state,
            interval.duration()
        );
        self.interval = Some(interval);
        self.timer = Some(Timer::new(interval));
        self.state = SchedulerState::Running;
    }

    /// Stop future steps. No-op unless running.
    pub fn pause(&mut self) {
        if self.state != SchedulerState::Running {
            return;
        }
        self.timer = None;
        self.state = SchedulerState::Paused;
        log::info!("scheduler paused");
    }

    /// Cancel scheduling and reset the board.
    pub fn clear(&mut self, stepper: &mut impl Stepper) {
        if self.state != SchedulerState::Idle {
            log::info!("scheduler {:?} -> Idle", self.state);
        }
        self.timer = None;
        self.state = SchedulerState::Idle;
        stepper.reset();
    }

    /// Feed elapsed time and run every step that came due. Returns the
    /// number of steps run, always 0 while idle or paused.
    pub fn advance(&mut self, elapsed: Duration, stepper: &mut impl Stepper) -> u32 {
        let Some(timer) = self.timer.as_mut() else {
            return 0;
        };

        let due = timer.take_due(elapsed);
        for _ in 0..due {
            stepper.step();
        }
        due
    }
}
