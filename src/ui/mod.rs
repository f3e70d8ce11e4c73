mod button;

pub use button::Button;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_GAP: f32 = 50.0;
const FIRST_BUTTON_Y: f32 = 20.0;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    StartPause,
    Clear,
    NextFigure,
    Random,
}

/// Create UI buttons with standard layout, stacked down the panel at `panel_x`
pub fn create_buttons(panel_x: f32) -> Vec<(ButtonAction, Button)> {
    [
        (ButtonAction::StartPause, "Start/Pause"),
        (ButtonAction::Clear, "Clear"),
        (ButtonAction::NextFigure, "Figure"),
        (ButtonAction::Random, "Random"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (action, label))| {
        let y = FIRST_BUTTON_Y + i as f32 * BUTTON_GAP;
        (action, Button::new(panel_x, y, PANEL_WIDTH, BUTTON_HEIGHT, label))
    })
    .collect()
}
