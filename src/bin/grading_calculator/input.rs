use grading_calculator::core::geometry::Point;
use grading_calculator::core::gesture::{Gesture, PointerButton};
use grading_calculator::core::session::Estimate;
use log::warn;
use macroquad::prelude::*;

use crate::state::AppRuntime;

pub(crate) fn screen_point(screen: Vec2) -> Point {
    Point::new(f64::from(screen.x), f64::from(screen.y))
}

/// Wheel zoom about the centre of the window.
pub(crate) fn update_zoom(state: &mut AppRuntime, screen_w: f32, screen_h: f32) {
    let (_, wheel_y) = mouse_wheel();
    if wheel_y != 0.0 {
        let centre = screen_point(vec2(screen_w * 0.5, screen_h * 0.5));
        state.view.apply_pinch(f64::from(wheel_y), centre);
    }
}

/// Feeds this frame's mouse events to the gesture tracker and applies any
/// completed click or drag to the session. Presses over prompts or the HUD
/// panel are not canvas presses.
pub(crate) fn update_pointer(state: &mut AppRuntime, mouse_screen: Vec2, blocked: bool) {
    let canvas = state.view.to_canvas(screen_point(mouse_screen));

    if !blocked {
        if is_mouse_button_pressed(MouseButton::Left) {
            state.gestures.press(canvas, PointerButton::Primary);
        } else if is_mouse_button_pressed(MouseButton::Right) {
            state.gestures.press(canvas, PointerButton::Secondary);
        }
    }

    state.gestures.motion(canvas);

    if is_mouse_button_released(MouseButton::Left) || is_mouse_button_released(MouseButton::Right)
    {
        if let Some(gesture) = state.gestures.release(canvas) {
            apply_gesture(state, gesture);
        }
    }
}

fn apply_gesture(state: &mut AppRuntime, gesture: Gesture) {
    match gesture {
        Gesture::Click {
            at,
            button: PointerButton::Primary,
        } => {
            let request = state.session.request_height(at);
            state.drafts.insert(request.id, String::new());
            state.active_prompt = Some(request.id);
            state.set_status("Enter the known height and press Enter");
        }
        Gesture::Click {
            at,
            button: PointerButton::Secondary,
        } => {
            state.session.add_result_point(at);
            state.set_status("Target marked; draw an arrow to estimate it");
        }
        Gesture::Drag { start, end } => {
            let outcome = match state.session.add_trajectory(start, end) {
                Ok(outcome) => outcome,
                Err(err) => {
                    state.set_status(err.to_string());
                    return;
                }
            };
            if let Some(factor) = outcome.calibrated {
                state.set_status(format!("Scale set to {factor:.4} units per pixel"));
            }
            match outcome.recomputed {
                Some(Ok(Estimate::Estimated(height))) => {
                    state.set_status(format!("Estimated target height {height:.1}"));
                }
                Some(Ok(Estimate::Invalid)) => {
                    state.set_status("Reference height is invalid; target not estimated");
                }
                Some(Ok(Estimate::Pending)) | None => {}
                Some(Err(err)) => {
                    warn!("{err}");
                    state.set_status(err.to_string());
                }
            }
        }
    }
}
