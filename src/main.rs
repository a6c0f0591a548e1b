use life_model::{LifeModel, Playback, input, input::Command, rendering, ui};
use macroquad::prelude::*;

const ROWS: usize = 60;
const COLUMNS: usize = 80;
const TICK_INTERVAL_MS: u32 = 100;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (COLUMNS as f32 * ui::CELL_SIZE + ui::PANEL_WIDTH) as i32,
        window_height: (ROWS as f32 * ui::CELL_SIZE) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut model = LifeModel::new(ROWS, COLUMNS, TICK_INTERVAL_MS);
    let mut playback = Playback::new();
    let mut generation: u64 = 0;
    let mut last_changed = model.randomize().len();

    loop {
        let mouse_pos = mouse_position();
        let buttons = ui::create_buttons();

        let command = input::button_command(&buttons, mouse_pos).or_else(input::keyboard_command);
        match command {
            Some(Command::ToggleRunning) => {
                if model.is_running() {
                    model.pause();
                } else {
                    model.resume();
                }
            }
            Some(Command::Step) => {
                last_changed = model.step().len();
                generation += 1;
            }
            Some(Command::Randomize) => {
                last_changed = model.randomize().len();
                generation = 0;
            }
            Some(Command::Clear) => {
                last_changed = model.clear().len();
                generation = 0;
            }
            None => {}
        }

        input::handle_mouse_paint(&mut model, mouse_pos);

        // External scheduler: the model never steps itself
        if let Some(changed) = playback.advance(&mut model, get_frame_time()) {
            last_changed = changed.len();
            generation += 1;
        }

        clear_background(BLACK);
        rendering::draw_cells(&model);
        rendering::draw_controls(&model, &buttons, generation, last_changed, mouse_pos);

        next_frame().await;
    }
}
