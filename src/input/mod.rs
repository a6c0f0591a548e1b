use macroquad::prelude::*;

use crate::domain::LifeModel;
use crate::ui::{Button, CELL_SIZE, grid_area_width};

/// Playback commands the adapter can issue against the model.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    ToggleRunning,
    Step,
    Randomize,
    Clear,
}

/// Map pressed keys to a command.
pub fn keyboard_command() -> Option<Command> {
    if is_key_pressed(KeyCode::Space) {
        Some(Command::ToggleRunning)
    } else if is_key_pressed(KeyCode::S) {
        Some(Command::Step)
    } else if is_key_pressed(KeyCode::R) {
        Some(Command::Randomize)
    } else if is_key_pressed(KeyCode::C) {
        Some(Command::Clear)
    } else {
        None
    }
}

/// Map a click on the control panel to a command.
/// Button order matches `ui::create_buttons`.
pub fn button_command(buttons: &[Button], mouse_pos: (f32, f32)) -> Option<Command> {
    buttons
        .iter()
        .position(|btn| btn.is_clicked(mouse_pos))
        .and_then(|idx| match idx {
            0 => Some(Command::ToggleRunning),
            1 => Some(Command::Step),
            2 => Some(Command::Randomize),
            3 => Some(Command::Clear),
            _ => None,
        })
}

/// Paint cells with the mouse while the simulation is paused:
/// left button sets a cell alive, right button kills it.
pub fn handle_mouse_paint(model: &mut LifeModel, mouse_pos: (f32, f32)) {
    if model.is_running() || mouse_pos.0 >= grid_area_width() {
        return;
    }

    let column = (mouse_pos.0 / CELL_SIZE) as usize;
    let row = (mouse_pos.1 / CELL_SIZE) as usize;
    if row >= model.row_count() || column >= model.column_count() {
        return;
    }
    let index = row * model.column_count() + column;

    if is_mouse_button_down(MouseButton::Left) {
        model.set_cell(index, true);
    } else if is_mouse_button_down(MouseButton::Right) {
        model.set_cell(index, false);
    }
}
