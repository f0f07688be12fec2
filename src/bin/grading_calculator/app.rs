use log::warn;
use macroquad::prelude::*;
use macroquad::ui::root_ui;

use crate::constants::{CANVAS_BG, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES};
use crate::controls::draw_height_prompts;
use crate::hud::{draw_hud, is_over_hud};
use crate::input::{update_pointer, update_zoom};
use crate::options::Options;
use crate::render::{draw_background, draw_points, draw_preview, draw_trajectories};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Landscape Grading Calculator".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run(options: Options) {
    let image_path = options.image.to_string_lossy().into_owned();
    let background = match load_texture(&image_path).await {
        Ok(texture) => {
            request_new_screen_size(texture.width(), texture.height());
            Some(texture)
        }
        Err(err) => {
            warn!("Could not load '{image_path}': {err}. Using a blank canvas.");
            None
        }
    };

    let mut state = AppRuntime::new(options.session_config(), background);
    if state.background.is_none() {
        state.set_status(format!("No diagram loaded from '{image_path}'"));
    }

    loop {
        let mouse = mouse_position();
        let mouse_screen = vec2(mouse.0, mouse.1);
        let screen_w = screen_width();
        let screen_h = screen_height();
        let blocked =
            root_ui().is_mouse_over(mouse_screen) || is_over_hud(mouse_screen, screen_h);

        if !blocked {
            update_zoom(&mut state, screen_w, screen_h);
        }
        update_pointer(&mut state, mouse_screen, blocked);

        clear_background(CANVAS_BG);
        draw_background(state.background.as_ref(), &state.view);
        draw_trajectories(state.session.trajectories(), &state.view);
        draw_points(&state.session, &state.view);
        draw_preview(state.gestures.preview(), &state.view);

        draw_height_prompts(&mut state);
        draw_hud(&state, screen_w, screen_h);

        next_frame().await;
    }
}
