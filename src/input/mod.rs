use macroquad::prelude::*;

use crate::application::{GameState, Geometry};
use crate::ui::{Button, ButtonAction};

/// Preset hotkeys, in `presets::all_figures()` order
const FIGURE_KEYS: [KeyCode; 9] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
];

/// Toggle the cell under a left click inside the board area
pub fn handle_board_click(
    state: &mut GameState,
    geometry: &Geometry,
    board_width: f32,
    mouse_pos: (f32, f32),
) {
    if !is_mouse_button_pressed(MouseButton::Left) || mouse_pos.0 >= board_width {
        return;
    }
    state.toggle_cell(geometry.cell_at(mouse_pos.0, mouse_pos.1));
}

/// Apply a panel action
pub fn apply_action(mut state: GameState, action: ButtonAction) -> GameState {
    match action {
        ButtonAction::StartPause => state.toggle_running(),
        ButtonAction::Clear => state.clear(),
        ButtonAction::Random => state.randomize(),
        ButtonAction::NextFigure => {
            state = state.select_next_figure();
            state.place_selected_figure();
            state
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::E, GameState::cycle_evolution),
        (KeyCode::Up, |s| s.adjust_speed(1)),
        (KeyCode::Down, |s| s.adjust_speed(-1)),
    ];

    let mut state = actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    if let Some(index) = FIGURE_KEYS.iter().position(|key| is_key_pressed(*key)) {
        if index < state.figures.len() {
            state.selected_figure = index;
            state.place_selected_figure();
        }
    }

    state
}

/// Process button clicks functionally
pub fn process_button_clicks(
    state: GameState,
    buttons: &[(ButtonAction, Button)],
    mouse_pos: (f32, f32),
) -> GameState {
    buttons
        .iter()
        .filter(|(_, btn)| btn.is_clicked(mouse_pos))
        .fold(state, |s, (action, _)| apply_action(s, *action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Config, SchedulerState};

    fn state() -> GameState {
        let config = Config {
            width: 30,
            height: 30,
            ..Config::default()
        };
        GameState::new(&config).unwrap()
    }

    #[test]
    fn test_start_pause_action() {
        let state = apply_action(state(), ButtonAction::StartPause);
        assert_eq!(state.scheduler().state(), SchedulerState::Running);
        let state = apply_action(state, ButtonAction::StartPause);
        assert_eq!(state.scheduler().state(), SchedulerState::Paused);
    }

    #[test]
    fn test_next_figure_action_places_it() {
        let state = apply_action(state(), ButtonAction::NextFigure);
        assert_eq!(state.selected_figure, 1);
        // Blinker
        assert_eq!(state.engine().population(), 3);
    }

    #[test]
    fn test_clear_action() {
        let state = apply_action(state(), ButtonAction::Random);
        let state = apply_action(state, ButtonAction::Clear);
        assert_eq!(state.engine().population(), 0);
        assert_eq!(state.scheduler().state(), SchedulerState::Idle);
    }
}
