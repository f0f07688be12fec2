use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1280;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;

pub const CANVAS_BG: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const GIVEN_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const INVALID_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
pub const RESULT_COLOR: Color = Color::new(0.0, 0.5, 0.0, 1.0);
pub const ARROW_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const PREVIEW_COLOR: Color = Color::new(0.5, 0.5, 0.5, 1.0);
pub const HUD_PANEL_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.85);

pub const DOT_RADIUS: f32 = 5.0;
pub const ARROW_THICKNESS: f32 = 2.0;
pub const PREVIEW_THICKNESS: f32 = 1.0;
pub const PREVIEW_DASH_PX: f32 = 6.0;
pub const LABEL_OFFSET_X: f32 = 10.0;
pub const LABEL_OFFSET_Y: f32 = -20.0;
pub const LABEL_FONT_SIZE: u16 = 20;

pub const PROMPT_WIDTH: f32 = 140.0;
pub const PROMPT_HEIGHT: f32 = 64.0;

pub const HUD_HEIGHT: f32 = 58.0;
pub const HUD_FONT_SIZE: u16 = 20;
