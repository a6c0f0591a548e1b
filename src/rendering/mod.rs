use macroquad::prelude::*;

use crate::domain::LifeModel;
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, panel_x};

/// Draw the grid from the model's committed cell states.
pub fn draw_cells(model: &LifeModel) {
    let alive_color = Color::from_rgba(0, 255, 150, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);
    let columns = model.column_count();

    for index in 0..model.total() {
        let x = (index % columns) as f32 * CELL_SIZE;
        let y = (index / columns) as f32 * CELL_SIZE;

        if model.cell_alive(index) {
            draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, alive_color);
        }
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, grid_line_color);
    }
}

/// Draw the control panel: buttons, status readout, and key help.
pub fn draw_controls(
    model: &LifeModel,
    buttons: &[Button],
    generation: u64,
    last_changed: usize,
    mouse_pos: (f32, f32),
) {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x() + 8.0;
    let dim_gray = Color::from_rgba(150, 150, 150, 255);

    let status = [
        (
            format!("Grid: {}x{}", model.row_count(), model.column_count()),
            220.0,
            14.0,
            dim_gray,
        ),
        (
            format!("Tick: {} ms", model.tick_interval_ms()),
            238.0,
            14.0,
            dim_gray,
        ),
        (format!("Generation: {}", generation), 268.0, 16.0, WHITE),
        (
            format!("Changed: {}", last_changed),
            288.0,
            14.0,
            Color::from_rgba(100, 200, 255, 255),
        ),
        (
            if model.is_running() { "Running" } else { "Paused" }.to_string(),
            318.0,
            16.0,
            if model.is_running() {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];

    for (text, y, size, color) in &status {
        draw_text(text, px, *y, *size, *color);
    }

    let help = [
        "Controls:",
        "LMB: Paint",
        "RMB: Erase",
        "Space: Play/Pause",
        "S: Step",
        "R: Random",
        "C: Clear",
    ];
    for (i, line) in help.iter().enumerate() {
        let size = if i == 0 { 14.0 } else { 12.0 };
        let color = if i == 0 { WHITE } else { GRAY };
        draw_text(line, px, 360.0 + i as f32 * 15.0, size, color);
    }
}
