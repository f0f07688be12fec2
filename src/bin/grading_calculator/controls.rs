use grading_calculator::core::estimation::Height;
use grading_calculator::core::session::{HeightRequest, RequestId};
use log::warn;
use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{LABEL_OFFSET_X, LABEL_OFFSET_Y, PROMPT_HEIGHT, PROMPT_WIDTH};
use crate::render::to_screen;
use crate::state::AppRuntime;

/// Draws one prompt per pending height request and submits whichever the
/// user confirmed this frame. Enter confirms the prompt edited (or opened)
/// most recently.
pub(crate) fn draw_height_prompts(state: &mut AppRuntime) {
    let requests = state.session.pending_requests().to_vec();
    let mut confirmed: Option<RequestId> = None;
    let mut edited: Option<RequestId> = None;

    for request in &requests {
        let anchor = to_screen(&state.view, request.position);
        let draft = state.drafts.entry(request.id).or_default();
        let before = draft.clone();
        widgets::Window::new(
            hash!(format!("height-prompt-{}", request.id.value())),
            vec2(anchor.x + LABEL_OFFSET_X, anchor.y + LABEL_OFFSET_Y),
            vec2(PROMPT_WIDTH, PROMPT_HEIGHT),
        )
        .titlebar(false)
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.input_text(
                hash!(format!("height-text-{}", request.id.value())),
                "",
                draft,
            );
            if ui.button(None, "Set") {
                confirmed = Some(request.id);
            }
        });
        if *draft != before {
            edited = Some(request.id);
        }
    }

    if edited.is_some() {
        state.active_prompt = edited;
    }

    if confirmed.is_none()
        && (is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter))
    {
        confirmed = enter_target(&requests, state.active_prompt);
    }

    if let Some(id) = confirmed {
        submit(state, id);
    }
}

/// Prompt confirmed by Enter: the active one while it is still pending,
/// otherwise the newest.
pub(crate) fn enter_target(
    requests: &[HeightRequest],
    active: Option<RequestId>,
) -> Option<RequestId> {
    active
        .filter(|id| requests.iter().any(|request| request.id == *id))
        .or_else(|| requests.last().map(|request| request.id))
}

fn submit(state: &mut AppRuntime, id: RequestId) {
    let text = state.drafts.remove(&id).unwrap_or_default();
    if state.active_prompt == Some(id) {
        state.active_prompt = None;
    }
    match state.session.submit_height(id, &text) {
        Ok(Height::Valid(value)) => state.set_status(format!("Known height {value} recorded")),
        Ok(Height::Invalid) => {
            state.set_status(format!("'{}' is not a number; point marked invalid", text.trim()))
        }
        Err(err) => {
            warn!("{err}");
            state.set_status(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::enter_target;
    use grading_calculator::core::geometry::Point;
    use grading_calculator::core::session::Session;

    #[test]
    fn enter_goes_to_the_edited_prompt() {
        let mut session = Session::default();
        let a = session.request_height(Point::new(10.0, 10.0));
        let b = session.request_height(Point::new(200.0, 10.0));

        // typed into A after opening B
        assert_eq!(enter_target(session.pending_requests(), Some(a.id)), Some(a.id));

        session.submit_height(a.id, "50").expect("pending");
        assert_eq!(session.given_points()[0].height.value(), Some(50.0));
        assert_eq!(session.pending_requests().len(), 1);
        assert_eq!(session.pending_requests()[0].id, b.id);
    }

    #[test]
    fn enter_falls_back_to_newest_prompt() {
        let mut session = Session::default();
        let a = session.request_height(Point::new(10.0, 10.0));
        let b = session.request_height(Point::new(200.0, 10.0));

        assert_eq!(enter_target(session.pending_requests(), None), Some(b.id));

        session.submit_height(a.id, "1").expect("pending");
        assert_eq!(enter_target(session.pending_requests(), Some(a.id)), Some(b.id));

        session.submit_height(b.id, "2").expect("pending");
        assert_eq!(enter_target(session.pending_requests(), Some(b.id)), None);
    }
}
