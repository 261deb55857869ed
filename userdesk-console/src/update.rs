//! Root update: routes messages to domains and fans out their events

use iced::Task;
use log::{debug, info};

use crate::common::messages::{CrossDomainEvent, DomainMessage};
use crate::domains::feedback::update_feedback;
use crate::domains::user_update::update_user_update;
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    debug!("[Update] {}", message.name());

    let result = match message {
        DomainMessage::UserUpdate(msg) => update_user_update(state, msg),
        DomainMessage::Feedback(msg) => update_feedback(state, msg),
        DomainMessage::NoOp => return Task::none(),
    };

    let follow_ups: Vec<Task<DomainMessage>> = result
        .events
        .iter()
        .map(|event| handle_event(state, event))
        .collect();

    if follow_ups.is_empty() {
        result.task
    } else {
        Task::batch(std::iter::once(result.task).chain(follow_ups))
    }
}

fn handle_event(state: &mut State, event: &CrossDomainEvent) -> Task<DomainMessage> {
    match event {
        CrossDomainEvent::UserSaved(id) => {
            info!(
                "[Update] User {} saved, {} notice(s) on the board",
                id,
                state.notice_board.len()
            );
        }
        CrossDomainEvent::UserUnavailable(id) => {
            info!("[Update] User {} unavailable; editor disabled", id);
        }
    }
    Task::none()
}
