use grading_calculator::core::calibration::Scale;
use macroquad::prelude::*;

use crate::constants::{HUD_FONT_SIZE, HUD_HEIGHT, HUD_PANEL_COLOR};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn hud_top(screen_h: f32) -> f32 {
    screen_h - HUD_HEIGHT
}

/// Whether a screen position falls on the HUD panel rather than the canvas.
pub(crate) fn is_over_hud(mouse_screen: Vec2, screen_h: f32) -> bool {
    mouse_screen.y >= hud_top(screen_h)
}

pub(crate) fn draw_hud(state: &AppRuntime, screen_w: f32, screen_h: f32) {
    let top = hud_top(screen_h);
    draw_rectangle(0.0, top, screen_w, HUD_HEIGHT, HUD_PANEL_COLOR);

    draw_ui_text(
        "Left click: known height | Right click: target | Drag: arrow | Wheel: zoom",
        12.0,
        top + 22.0,
        HUD_FONT_SIZE,
        DARKGRAY,
    );

    let config = state.session.config();
    let scale = match state.session.scale() {
        Scale::Uncalibrated => format!(
            "Scale: draw a {} unit reference arrow",
            config.reference_distance
        ),
        Scale::Calibrated(factor) => format!("Scale: {factor:.4} units/px"),
    };
    draw_ui_text(
        &format!(
            "{scale} | Descent x{:.2} | Zoom {:.0}% | {}",
            config.descent_rate,
            state.view.zoom() * 100.0,
            state.status_line
        ),
        12.0,
        top + 46.0,
        HUD_FONT_SIZE,
        BLACK,
    );
}
