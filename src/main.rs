use std::time::Duration;

use bounded_life::{
    Config, EngineEvent, GameState, input, rendering,
    ui::{self, PANEL_WIDTH},
};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    // Sized for the default board; custom sizes resize on the first frame
    let config = Config::default();
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: (config.width as f32 * config.cell_width) as i32 + PANEL_WIDTH as i32 + 1,
        window_height: ((config.height as f32 * config.cell_height) as i32 + 1).max(640),
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid configuration: {err}");
            return;
        }
    };
    let mut state = match GameState::new(&config) {
        Ok(state) => state,
        Err(err) => {
            log::error!("cannot create board: {err}");
            return;
        }
    };
    state.subscribe(|event| {
        if let EngineEvent::Cleared = event {
            log::info!("board cleared");
        }
    });

    let geometry = config.geometry();
    let bounds = state.engine().bounds();
    let board_width = geometry.pixel_width(&bounds);
    request_new_screen_size(
        board_width + PANEL_WIDTH,
        geometry.pixel_height(&bounds).max(640.0),
    );

    loop {
        let mouse_pos = mouse_position();
        let panel_x = board_width;
        let buttons = ui::create_buttons(panel_x);

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        input::handle_board_click(&mut state, &geometry, board_width, mouse_pos);
        state = input::process_keyboard_input(state);

        state = state.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(Color::from_rgba(30, 30, 30, 255));
        rendering::draw_board(&state, &config);
        rendering::draw_controls(&state, &buttons, panel_x, mouse_pos);

        next_frame().await;
    }
}
