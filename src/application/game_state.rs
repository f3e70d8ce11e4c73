use std::time::{Duration, Instant};

use crate::domain::{
    Cell, EngineEvent, Evolution, Figure, LifeError, Offset, Placement, SimulationEngine,
    presets,
};

use super::{Config, Scheduler, SchedulerState, StepInterval};

const MIN_STEP: Duration = Duration::from_millis(10);
const MAX_STEP: Duration = Duration::from_millis(2_000);

/// GameState orchestrates the simulation.
/// This is the application layer that coordinates the engine and scheduler.
///
/// The engine is only reachable read-only from outside; every lifecycle
/// change (start, pause, clear) goes through `GameState` so the scheduler
/// and the board never disagree.
pub struct GameState {
    engine: SimulationEngine,
    scheduler: Scheduler,
    pub figures: Vec<Figure>,
    pub selected_figure: usize,
    step_interval: StepInterval,
    pub last_step_time_ms: f32, // Step performance metric
}

impl GameState {
    /// Validate `config` and build an idle, empty board
    pub fn new(config: &Config) -> Result<Self, LifeError> {
        let bounds = config.bounds()?;
        let step_interval = config.step_interval()?;
        log::info!(
            "board {}x{}, step every {:?}",
            bounds.width(),
            bounds.height(),
            step_interval.duration()
        );

        Ok(Self {
            engine: SimulationEngine::new(bounds),
            scheduler: Scheduler::new(),
            figures: presets::all_figures(),
            selected_figure: 0,
            step_interval,
            last_step_time_ms: 0.0,
        })
    }

    pub const fn step_interval(&self) -> StepInterval {
        self.step_interval
    }

    pub const fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub const fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Register a listener for engine events
    pub fn subscribe(&mut self, listener: impl FnMut(EngineEvent) + 'static) {
        self.engine.subscribe(listener);
    }

    /// Switch to the next step strategy
    pub fn cycle_evolution(mut self) -> Self {
        let all = Evolution::all();
        let current = self.engine.evolution();
        let index = all.iter().position(|&e| e == current).unwrap_or(0);
        let next = all[(index + 1) % all.len()];
        log::info!("evolution {} -> {}", current.name(), next.name());
        self.engine.set_evolution(next);
        self
    }

    /// Start stepping at the configured interval
    pub fn start(mut self) -> Self {
        self.scheduler.start(self.step_interval);
        self
    }

    pub fn pause(mut self) -> Self {
        self.scheduler.pause();
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(self) -> Self {
        if self.is_running() { self.pause() } else { self.start() }
    }

    /// Stop the scheduler, empty the board and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.scheduler.clear(&mut self.engine);
        self
    }

    /// Replace the board with a random soup
    pub fn randomize(mut self) -> Self {
        let bounds = self.engine.bounds();
        let soup = presets::random_soup(&bounds, 0.3, &mut rand::rng());
        self.engine.set_figure(soup, Offset::default());
        self
    }

    /// Adjust simulation speed; positive `delta` means more steps per second
    pub fn adjust_speed(mut self, delta: i32) -> Self {
        let current = self.step_interval.duration();
        let scaled = if delta >= 0 {
            current / 2u32.saturating_pow(delta.unsigned_abs())
        } else {
            current.saturating_mul(2u32.saturating_pow(delta.unsigned_abs()))
        };
        let next = scaled.clamp(MIN_STEP, MAX_STEP);

        if let Ok(interval) = StepInterval::new(next) {
            self.step_interval = interval;
            // A running scheduler picks the new cadence up immediately
            if self.scheduler.state() == SchedulerState::Running {
                self.scheduler.start(interval);
            }
        }
        self
    }

    /// Flip the cell under the cursor; out-of-board clicks are logged and ignored
    pub fn toggle_cell(&mut self, cell: Cell) {
        if let Err(err) = self.engine.toggle_cell(cell) {
            log::warn!("ignoring edit: {err}");
        }
    }

    /// Cycle to the next preset figure
    pub fn select_next_figure(mut self) -> Self {
        self.selected_figure = (self.selected_figure + 1) % self.figures.len().max(1);
        self
    }

    /// Replace the board with the selected figure, centered
    pub fn place_selected_figure(&mut self) -> Placement {
        let Some(figure) = self.figures.get(self.selected_figure) else {
            return Placement::default();
        };
        let offset = figure.centered_offset(&self.engine.bounds());
        log::info!("placing {} at {:?}", figure.name, offset);
        self.engine.set_figure(figure.cells.iter().copied(), offset)
    }

    /// Update simulation by one frame
    /// This is the main game loop coordination
    pub fn tick(mut self, delta: Duration) -> Self {
        let start = Instant::now();
        let steps = self.scheduler.advance(delta, &mut self.engine);
        if steps > 0 {
            self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0 / steps as f32;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        let config = Config {
            width: 20,
            height: 20,
            step_duration: Duration::from_millis(100),
            ..Config::default()
        };
        GameState::new(&config).unwrap()
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = Config {
            width: -3,
            ..Config::default()
        };
        assert!(GameState::new(&config).is_err());
    }

    #[test]
    fn test_tick_only_steps_while_running() {
        let mut state = state();
        state.toggle_cell(Cell::new(1, 1));

        state = state.tick(Duration::from_secs(5));
        assert_eq!(state.engine().current_generation(), 0);

        state = state.start().tick(Duration::from_millis(100));
        assert_eq!(state.engine().current_generation(), 1);

        state = state.pause().tick(Duration::from_secs(5));
        assert_eq!(state.engine().current_generation(), 1);
    }

    #[test]
    fn test_toggle_running() {
        let state = state().toggle_running();
        assert!(state.is_running());
        let state = state.toggle_running();
        assert_eq!(state.scheduler().state(), SchedulerState::Paused);
    }

    #[test]
    fn test_clear_stops_and_resets() {
        let mut state = state().start().tick(Duration::from_millis(300));
        state.place_selected_figure();

        let state = state.clear();
        assert_eq!(state.scheduler().state(), SchedulerState::Idle);
        assert_eq!(state.engine().current_generation(), 0);
        assert!(state.engine().live_cells().is_empty());
    }

    #[test]
    fn test_nothing_steps_after_clear() {
        let mut state = state();
        state.place_selected_figure();
        let state = state.start().clear().tick(Duration::from_secs(5));

        assert_eq!(state.scheduler().state(), SchedulerState::Idle);
        assert_eq!(state.engine().current_generation(), 0);
        assert!(state.engine().live_cells().is_empty());
    }

    #[test]
    fn test_cycle_evolution() {
        let state = state();
        assert_eq!(state.engine().evolution(), Evolution::Parallel);

        let state = state.cycle_evolution();
        assert_eq!(state.engine().evolution(), Evolution::Serial);

        let state = state.cycle_evolution();
        assert_eq!(state.engine().evolution(), Evolution::Parallel);
    }

    #[test]
    fn test_listener_sees_steps() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut state = state();
        let sink = Rc::clone(&seen);
        state.subscribe(move |event| sink.borrow_mut().push(event));

        state.toggle_cell(Cell::new(1, 1));
        let _state = state.start().tick(Duration::from_millis(100));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], EngineEvent::Edited { population: 1 });
        assert_eq!(
            seen[1],
            EngineEvent::Stepped {
                generation: 1,
                population: 0
            }
        );
    }

    #[test]
    fn test_out_of_board_click_is_ignored() {
        let mut state = state();
        state.toggle_cell(Cell::new(20, 0));
        state.toggle_cell(Cell::new(-1, 5));
        assert!(state.engine().live_cells().is_empty());
    }

    #[test]
    fn test_place_selected_figure() {
        let mut state = state();
        let placement = state.place_selected_figure();
        assert_eq!(placement, Placement { placed: 5, rejected: 0 });

        let state = state.select_next_figure();
        assert_eq!(state.figures[state.selected_figure].name, "Blinker");
    }

    #[test]
    fn test_adjust_speed_is_clamped() {
        let state = state().adjust_speed(1);
        assert_eq!(state.step_interval().duration(), Duration::from_millis(50));

        let state = state.adjust_speed(-20);
        assert_eq!(state.step_interval().duration(), MAX_STEP);

        let state = state.adjust_speed(20);
        assert_eq!(state.step_interval().duration(), MIN_STEP);
    }

    #[test]
    fn test_randomize_stays_in_bounds() {
        let state = state().randomize();
        let bounds = state.engine().bounds();
        assert!(state.engine().live_cells().iter().all(|c| bounds.contains(c)));
    }
}
