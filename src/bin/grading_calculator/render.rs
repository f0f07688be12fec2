use grading_calculator::core::geometry::{Point, angle, distance};
use grading_calculator::core::session::{Estimate, Session, Trajectory};
use grading_calculator::core::view::ZoomView;
use macroquad::prelude::*;

use crate::constants::{
    ARROW_COLOR, ARROW_THICKNESS, DOT_RADIUS, GIVEN_COLOR, INVALID_COLOR, LABEL_FONT_SIZE,
    LABEL_OFFSET_X, LABEL_OFFSET_Y, PREVIEW_COLOR, PREVIEW_DASH_PX, PREVIEW_THICKNESS,
    RESULT_COLOR,
};

pub(crate) fn to_screen(view: &ZoomView, canvas: Point) -> Vec2 {
    let p = view.to_screen(canvas);
    vec2(p.x as f32, p.y as f32)
}

pub(crate) fn draw_ui_text(text: &str, x: f32, y: f32, font_size: u16, color: Color) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_background(texture: Option<&Texture2D>, view: &ZoomView) {
    let Some(texture) = texture else {
        return;
    };
    let zoom = view.zoom() as f32;
    let origin = to_screen(view, Point::new(0.0, 0.0));
    draw_texture_ex(
        texture,
        origin.x,
        origin.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(texture.width() * zoom, texture.height() * zoom)),
            ..Default::default()
        },
    );
}

fn draw_marker(view: &ZoomView, position: Point, color: Color, label: Option<&str>) {
    let p = to_screen(view, position);
    draw_circle(p.x, p.y, DOT_RADIUS * view.zoom() as f32, color);
    if let Some(label) = label {
        draw_ui_text(
            label,
            p.x + LABEL_OFFSET_X,
            p.y + LABEL_OFFSET_Y,
            LABEL_FONT_SIZE,
            color,
        );
    }
}

pub(crate) fn draw_trajectories(trajectories: &[Trajectory], view: &ZoomView) {
    for trajectory in trajectories {
        let start = to_screen(view, trajectory.start);
        let end = to_screen(view, trajectory.end);
        draw_line(start.x, start.y, end.x, end.y, ARROW_THICKNESS, ARROW_COLOR);

        let [tip, left, right] = trajectory.head().map(|p| to_screen(view, p));
        draw_triangle(tip, left, right, ARROW_COLOR);
    }
}

pub(crate) fn draw_points(session: &Session, view: &ZoomView) {
    for request in session.pending_requests() {
        draw_marker(view, request.position, GIVEN_COLOR, None);
    }

    for given in session.given_points() {
        let color = if given.height.is_valid() {
            GIVEN_COLOR
        } else {
            INVALID_COLOR
        };
        draw_marker(view, given.position, color, Some(&given.height.to_string()));
    }

    for result in session.result_points() {
        let (label, color) = match result.estimate {
            Estimate::Pending => ("0.0".to_string(), RESULT_COLOR),
            Estimate::Estimated(height) => (format!("{height:.1}"), RESULT_COLOR),
            Estimate::Invalid => ("invalid".to_string(), INVALID_COLOR),
        };
        draw_marker(view, result.position, color, Some(&label));
    }
}

pub(crate) fn draw_preview(segment: Option<(Point, Point)>, view: &ZoomView) {
    let Some((start, end)) = segment else {
        return;
    };
    let length = distance(start, end) * view.zoom();
    let direction = angle(start, end);
    let step = f64::from(PREVIEW_DASH_PX);
    let origin = to_screen(view, start);
    let (sin, cos) = direction.sin_cos();

    let mut along = 0.0;
    while along < length {
        let dash_end = (along + step).min(length);
        draw_line(
            origin.x + (cos * along) as f32,
            origin.y + (sin * along) as f32,
            origin.x + (cos * dash_end) as f32,
            origin.y + (sin * dash_end) as f32,
            PREVIEW_THICKNESS,
            PREVIEW_COLOR,
        );
        along += step * 2.0;
    }
}
