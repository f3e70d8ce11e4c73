use macroquad::prelude::*;

use crate::application::{CellShape, Config, GameState, Geometry, HexColor, SchedulerState};
use crate::domain::{BoardBounds, Cell};
use crate::ui::{Button, ButtonAction, PANEL_WIDTH};

/// Convert a configured color to macroquad's representation
pub fn to_color(color: HexColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

/// Closed set of live-cell draw strategies
fn draw_cell(shape: CellShape, geometry: &Geometry, cell: Cell, color: Color) {
    let (x, y) = geometry.origin_of(cell);
    match shape {
        CellShape::Circle => {
            let radius = geometry.cell_width / 2.0 - geometry.cell_width / 10.0;
            draw_circle(
                x + geometry.cell_width / 2.0,
                y + geometry.cell_height / 2.0,
                radius,
                color,
            );
        }
        CellShape::Rect => {
            draw_rectangle(
                x + 1.0,
                y + 1.0,
                geometry.cell_width - 1.0,
                geometry.cell_height - 1.0,
                color,
            );
        }
    }
}

/// Draw the grid lines over the whole board
fn draw_grid_lines(bounds: &BoardBounds, geometry: &Geometry, color: Color) {
    let width = geometry.pixel_width(bounds);
    let height = geometry.pixel_height(bounds);

    for col in 0..=bounds.width() {
        let x = 0.5 + col as f32 * geometry.cell_width;
        draw_line(x, 0.0, x, height, 1.0, color);
    }
    for row in 0..=bounds.height() {
        let y = 0.5 + row as f32 * geometry.cell_height;
        draw_line(0.0, y, width, y, 1.0, color);
    }
}

/// Draw the board: background, grid, then every live cell
pub fn draw_board(state: &GameState, config: &Config) {
    let bounds = state.engine().bounds();
    let geometry = config.geometry();

    draw_rectangle(
        0.0,
        0.0,
        geometry.pixel_width(&bounds),
        geometry.pixel_height(&bounds),
        WHITE,
    );
    draw_grid_lines(&bounds, &geometry, to_color(config.grid_color));

    let alive = to_color(config.alive_cell_color);
    for cell in state.engine().snapshot().iter() {
        draw_cell(config.cell_type, &geometry, cell, alive);
    }
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and status
pub fn draw_controls(
    state: &GameState,
    buttons: &[(ButtonAction, Button)],
    panel_x: f32,
    mouse_pos: (f32, f32),
) {
    draw_rectangle(
        panel_x,
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );

    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let engine = state.engine();
    let (status, status_color) = match state.scheduler().state() {
        SchedulerState::Running => ("Running", Color::from_rgba(0, 255, 0, 255)),
        SchedulerState::Paused => ("Paused", Color::from_rgba(255, 165, 0, 255)),
        SchedulerState::Idle => ("Idle", GRAY),
    };
    let figure = state
        .figures
        .get(state.selected_figure)
        .map_or("-", |f| f.name);
    let (width, height) = engine.bounds().dimensions();

    // Define all labels declaratively
    let labels = [
        ("Generation:".to_owned(), 250.0, 16.0, WHITE),
        (engine.current_generation().to_string(), 270.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Population:".to_owned(), 300.0, 16.0, WHITE),
        (engine.population().to_string(), 320.0, 16.0, LIGHTGRAY),
        ("Status:".to_owned(), 350.0, 16.0, WHITE),
        (status.to_owned(), 370.0, 16.0, status_color),
        ("Step:".to_owned(), 400.0, 16.0, WHITE),
        (format!("{} ms", state.step_interval().duration().as_millis()), 420.0, 14.0, LIGHTGRAY),
        (format!("Compute: {:.1}ms", state.last_step_time_ms), 440.0, 13.0, GRAY),
        ("Figure:".to_owned(), 470.0, 16.0, WHITE),
        (figure.to_owned(), 490.0, 14.0, LIGHTGRAY),
        (format!("Board: {width}x{height}"), 520.0, 12.0, GRAY),
        (format!("Evolution: {}", engine.evolution().name()), 535.0, 12.0, GRAY),
        ("Space: Start/Pause".to_owned(), 560.0, 12.0, GRAY),
        ("C: Clear  R: Random".to_owned(), 575.0, 12.0, GRAY),
        ("1-9: Figure".to_owned(), 590.0, 12.0, GRAY),
        ("Up/Down: Speed".to_owned(), 605.0, 12.0, GRAY),
        ("E: Evolution".to_owned(), 620.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text_label(text, panel_x + 8.0, *y, *size, *color);
    });
}
