//! Operator notices: dismissal and the toast overlay

pub mod view;

use log::debug;

use crate::common::messages::DomainUpdateResult;
use crate::infra::services::NoticeId;
use crate::state::State;

#[derive(Debug, Clone)]
pub enum FeedbackMessage {
    Dismiss(NoticeId),
    ClearAll,
}

impl FeedbackMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dismiss(_) => "Feedback::Dismiss",
            Self::ClearAll => "Feedback::ClearAll",
        }
    }
}

pub fn update_feedback(
    state: &mut State,
    message: FeedbackMessage,
) -> DomainUpdateResult {
    match message {
        FeedbackMessage::Dismiss(id) => {
            if !state.notice_board.dismiss(id) {
                debug!("[Feedback] Notice {:?} already gone", id);
            }
        }
        FeedbackMessage::ClearAll => state.notice_board.clear(),
    }
    DomainUpdateResult::none()
}
