use std::collections::BTreeMap;

use chrono::Local;
use grading_calculator::core::gesture::GestureTracker;
use grading_calculator::core::session::{RequestId, Session, SessionConfig};
use grading_calculator::core::view::ZoomView;
use log::debug;
use macroquad::prelude::Texture2D;

pub(crate) struct AppRuntime {
    pub(crate) session: Session,
    pub(crate) gestures: GestureTracker,
    pub(crate) view: ZoomView,
    /// Text typed so far into each open height prompt.
    pub(crate) drafts: BTreeMap<RequestId, String>,
    /// Prompt that Enter confirms: the one created or edited most recently.
    pub(crate) active_prompt: Option<RequestId>,
    pub(crate) background: Option<Texture2D>,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: SessionConfig, background: Option<Texture2D>) -> Self {
        Self {
            session: Session::new(config),
            gestures: GestureTracker::default(),
            view: ZoomView::default(),
            drafts: BTreeMap::new(),
            active_prompt: None,
            background,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("{message}");
        self.status_line = format!("[{}] {message}", Local::now().format("%H:%M:%S"));
    }
}
